use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("illegal move {input} in position {position}")]
    IllegalMove { position: String, input: String },
    #[error("invalid position: {0}")]
    InvalidPosition(String),
    #[error("invalid annotation: {0:?}")]
    InvalidAnnotation(String),
}
