use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtdError {
    #[error("optimizer configuration error: {0}")]
    Config(String),
}

pub type EtdResult<T> = Result<T, EtdError>;
