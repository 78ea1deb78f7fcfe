mod secret;
pub use secret::Secret;

mod env;
pub use env::{load_from_env, Assign, LoadFromEnv};
