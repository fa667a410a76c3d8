/// Errors returned by every fallible operation of this crate.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    #[error("Invalid format: '{input}' does not match {expected}")]
    InvalidFormat { input: String, expected: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Not a sequence: got a JSON {0}")]
    NotASequence(&'static str),
}

impl TypesError {
    /// Create an InvalidFormat error for the given input and expected layout.
    pub fn invalid_format(input: impl Into<String>, expected: &'static str) -> Self {
        TypesError::InvalidFormat {
            input: input.into(),
            expected,
        }
    }

    /// True for the errors caused by unparseable text.
    pub fn is_format_error(&self) -> bool {
        matches!(self, TypesError::InvalidFormat { .. })
    }
}
