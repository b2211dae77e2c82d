use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no {rtype:?} resource available after {attempts} attempts")]
    PoolExhausted { rtype: String, attempts: u32 },

    #[error("{operation} rejected by pool manager: {status} {reason}")]
    Protocol {
        operation: &'static str,
        status: u16,
        reason: String,
    },

    #[error("invalid pool manager host {url:?}: {reason}")]
    InvalidHost { url: String, reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed resource payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
