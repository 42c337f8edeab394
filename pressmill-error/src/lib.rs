pub mod codec;

use anyhow::Error as AnyhowError;
use codec::CodecError;
use serde_json::Error as SerdeJsonError;
use std::{error::Error as StdError, io::Error as IoError};
use thiserror::Error;

pub type PressmillResult<T, E = PressmillError> = anyhow::Result<T, E>;
pub type CodecResult<T, E = CodecError> = Result<T, E>;

#[derive(Error, Debug, Default)]
pub enum PressmillError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("{0}")]
    StdError(#[from] Box<dyn StdError + Send + Sync>),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    CodecError(#[from] CodecError),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<()> for PressmillError {
    #[inline]
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<String> for PressmillError {
    #[inline]
    fn from(msg: String) -> Self {
        Self::Msg(msg)
    }
}

impl From<&str> for PressmillError {
    #[inline]
    fn from(msg: &str) -> Self {
        Self::Msg(msg.to_string())
    }
}
