use thiserror::Error;

/// Errors raised by the drawing engine and its I/O boundaries
#[derive(Error, Debug)]
pub enum PainterError {
    #[error("drawing surface is not initialized")]
    NotInitialized,
    #[error("drawing surface is already initialized; tear it down first")]
    AlreadyInitialized,
    #[error("unrecognized color: {0:?}")]
    InvalidColor(String),
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("cannot resize the drawing surface while a stroke is in progress")]
    ResizeDuringStroke,
    #[error("photo reference is empty")]
    EmptyPhotoReference,
    #[error("failed to load photo {reference}")]
    PhotoLoad {
        reference: String,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported photo reference {0}")]
    UnsupportedPhotoReference(String),
    #[error("malformed data URL")]
    DataUrl(#[from] base64::DecodeError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to encode image")]
    Encode(#[source] image::ImageError),
    #[error("invalid configuration")]
    Config(#[from] serde_json::Error),
}

/// Result of a control or input operation.
///
/// Nothing in the engine fails loudly: guard conditions degrade to a no-op and
/// report which guard tripped so callers (and tests) can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation changed state or pixels
    Applied,
    /// Nothing to do (e.g. a move while idle, a repeated color)
    Ignored,
    /// The input was invalid for drawing (multi-touch, bad color)
    Rejected,
    /// Called before `init` or after `teardown`
    NotReady,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}
