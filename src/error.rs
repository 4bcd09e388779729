use thiserror::Error;

/// Errors returned by this crate.
///
/// Pool operations themselves never fail; errors only come from reading raw
/// bytes back as text, from invalid configuration, and from initializing the
/// default pool twice.
#[derive(Debug, Error)]
pub enum Error {
    /// The builder holds bytes that are not valid UTF-8.
    #[error("builder content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The initial buffer capacity is larger than the shrink ceiling.
    #[error(
        "buffer_capacity ({buffer_capacity}) must be less than or equal to max_buffer_capacity ({max_buffer_capacity})"
    )]
    InvalidConfig {
        buffer_capacity: usize,
        max_buffer_capacity: usize,
    },

    /// The default pool was already created.
    #[error("the default pool is already initialized")]
    AlreadyInitialized,
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::InvalidUtf8(err.utf8_error())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
