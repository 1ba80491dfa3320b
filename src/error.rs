use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum Error {
    #[error("malformed line: {0}")]
    Format(String),
    #[error("rover starts at ({x}, {y}), outside the {width}x{height} grid")]
    OutOfBoundsStart {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
    #[error("invalid command `{0}`")]
    InvalidCommand(char),
    #[error("invalid orientation `{0}`")]
    InvalidOrientation(char),
}
