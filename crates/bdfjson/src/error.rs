use thiserror::Error;

#[derive(Debug, Error)]
pub enum BdfError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input is not valid utf-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("malformed {field} field: {value:?}")]
    MalformedField { field: &'static str, value: String },
    #[error("malformed bitmap row: {0:?}")]
    MalformedBitmapRow(String),
    #[error("input ended inside glyph {0:?}")]
    TruncatedGlyph(String),
}

pub type Result<T> = std::result::Result<T, BdfError>;
