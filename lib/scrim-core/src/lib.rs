use crate::host::HostError;

mod animation;
pub mod config;
pub mod data;
pub mod dates;
pub mod device;
pub mod host;
pub mod overlay;
pub mod paths;

pub use config::Config;

pub fn version() -> &'static str {
    option_env!("VERSION").unwrap_or("v0.0.0-dev")
}

#[derive(Debug)]
pub enum ScrimFatalError {
    Error(String),
    HostError(HostError),
}

pub type ScrimResult<T> = Result<T, ScrimFatalError>;

impl From<HostError> for ScrimFatalError {
    fn from(error: HostError) -> Self {
        ScrimFatalError::HostError(error)
    }
}

impl From<&str> for ScrimFatalError {
    fn from(value: &str) -> Self {
        ScrimFatalError::Error(value.to_owned())
    }
}

impl From<String> for ScrimFatalError {
    fn from(error: String) -> Self {
        ScrimFatalError::Error(error)
    }
}
