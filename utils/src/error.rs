use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilsError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),
}
