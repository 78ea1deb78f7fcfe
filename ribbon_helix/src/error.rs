#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not authorize with the streaming platform")]
    Auth(#[source] anyhow::Error),

    #[error("could not fetch from the streaming platform")]
    Fetch(#[source] anyhow::Error),
}

impl Error {
    pub(crate) fn auth(err: impl Into<anyhow::Error>) -> Self {
        Self::Auth(err.into())
    }

    pub(crate) fn fetch(err: impl Into<anyhow::Error>) -> Self {
        Self::Fetch(err.into())
    }
}
