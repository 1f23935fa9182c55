use datum_result::Error;

/// Error type for decoding raw slot bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input slice does not contain enough bytes to decode a value.
    NotEnoughData { expected: usize, got: usize },
    /// The byte format is invalid for the target type (e.g., invalid UTF-8).
    InvalidFormat,
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::NotEnoughData { expected, got } => Error::InvalidArgumentError(format!(
                "slot holds {got} bytes, expected at least {expected}"
            )),
            DecodeError::InvalidFormat => {
                Error::InvalidArgumentError("slot bytes are not valid UTF-8".into())
            }
        }
    }
}
