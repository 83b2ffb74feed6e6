use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampoError {
    #[error("availability request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("availability response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CampoError>;
