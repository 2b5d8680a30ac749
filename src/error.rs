#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Variable '{name}' not found")]
    VariableNotFound { name: String },

    #[error("std::io error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<CoreError> for std::io::Error {
    fn from(err: CoreError) -> std::io::Error {
        match err {
            CoreError::IoError(io_err) => io_err,
            _ => std::io::Error::other(err.to_string()),
        }
    }
}
