use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Not signed in. Run `vividhands login` first")]
    NotSignedIn,

    #[error("Not signed in as a seller. Run `vividhands artisan login` first")]
    ArtisanNotSignedIn,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] vividhands_common::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<dialoguer::Error> for StorefrontError {
    fn from(e: dialoguer::Error) -> Self {
        StorefrontError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
