use std::path::PathBuf;
use thiserror::Error;

pub type SvhapResult<T> = std::result::Result<T, SvhapError>;

#[derive(Debug, Error)]
pub enum SvhapError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("SVTYPE missing in VCF record")]
    MissingSvtype,
    #[error("Invalid SVTYPE: {value}")]
    InvalidSvtype { value: String },
    #[error("Malformed VCF record: {message}")]
    MalformedRecord { message: String },
    #[error("Invalid gzip header: {}", path.display())]
    InvalidGzipHeader { path: PathBuf },
}

impl SvhapError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            message: message.into(),
        }
    }
}

#[macro_export]
macro_rules! svhap_error {
    ($($arg:tt)*) => {
        $crate::error::SvhapError::message(format!($($arg)*))
    };
}
