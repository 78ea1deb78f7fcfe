use anyhow::Context as _;

pub type Assign<T> = fn(&mut T, String);

pub fn load_from_env<T: Default + std::fmt::Debug>(
    keys: &[(&str, Assign<T>)],
) -> anyhow::Result<T> {
    let lookup = |key| {
        log::trace!("looking up {key}");
        std::env::var(key).with_context(|| format!("env var '{key}' is not set"))
    };

    log::trace!("loading env vars for: {}", std::any::type_name::<T>());

    let this = keys.iter().try_fold(T::default(), |mut this, (key, func)| {
        func(&mut this, lookup(key)?);
        Ok(this)
    });

    if let Ok(this) = &this {
        log::debug!("created: {:?}", this);
    }
    this
}

pub trait LoadFromEnv
where
    Self: Sized,
{
    fn load_from_env() -> anyhow::Result<Self>;
}
