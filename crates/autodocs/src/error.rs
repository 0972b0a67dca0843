#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Discovery failed: {0}")]
    Discovery(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },
}

impl Error {
    pub fn io(path: impl std::fmt::Display, err: std::io::Error) -> Self {
        Error::Io {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<autodocs_core::documenter::SelectorError> for Error {
    fn from(err: autodocs_core::documenter::SelectorError) -> Self {
        Error::Configuration(err.to_string())
    }
}
