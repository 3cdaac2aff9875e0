use crate::options::GraphicsApi;
use thiserror::Error;

/// Configuration and platform failures raised by the platform plugins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
    /// No graphics API was selected in the options
    #[error("no graphics plugin selected (use --graphics)")]
    MissingGraphicsApi,
    /// The compiled platform cannot drive the requested graphics API
    #[error("graphics plugin {api} is not supported on {platform}")]
    UnsupportedGraphicsApi {
        api: GraphicsApi,
        platform: &'static str,
    },
    /// A platform handle required for instance creation was null
    #[error("platform handle `{0}` is null")]
    NullHandle(&'static str),
    /// An option string did not name a known value
    #[error("unknown {kind} `{value}`")]
    UnknownOption { kind: &'static str, value: String },
}
