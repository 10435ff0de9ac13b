use thiserror::Error;

pub type SliceResult<T> = Result<T, SliceError>;

/// Errors raised by the slice model.
///
/// Every fallible operation reports one of these before it touches a
/// backing store, so a failed call never leaves a partial write behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("{op}: index {index} out of range [0:{limit}]")]
    OutOfRange {
        op: &'static str,
        index: usize,
        limit: usize,
    },
}

impl SliceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn out_of_range(op: &'static str, index: usize, limit: usize) -> Self {
        log::trace!("{op}: rejected index {index} (limit {limit})");
        Self::OutOfRange { op, index, limit }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
