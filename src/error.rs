use crate::config::TransportKind;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("not found")]
    NotFound,

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("transport: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    #[error("{0} transport is not available in this build")]
    Unavailable(TransportKind),
}

impl Error {
    pub(crate) fn transport(e: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(e.into())
    }

    /// The status code the server answered with, if the read failed on one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus(status) => Some(*status),
            _ => None,
        }
    }

    /// Whether the read could not be performed at all, as opposed to completing
    /// with a failure status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NotFound | Self::Transport(_))
    }
}
