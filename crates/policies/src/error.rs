use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Policy received invalid parameters: {0}")]
    InvalidParameters(String),
}
