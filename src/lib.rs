//! Platform plugins for OpenXR applications. Keeps the platform-specific parts of instance
//! creation (Android VM and activity handles, platform extensions) behind one trait so the rest of
//! the application never branches on the target platform.
extern crate openxr as xr;
mod chain;
mod error;
pub mod extensions;
pub mod instance;
mod options;
mod platform;
mod platform_data;
pub use chain::{ExtensionStruct, InstanceCreateExtension, Types};
pub use error::PlatformError;
pub use options::{AppSpace, BlendMode, FormFactor, GraphicsApi, Options, ViewConfiguration};
pub use platform::*;
pub use platform_data::PlatformData;

/// Engine name reported to the runtime
pub const ENGINE_NAME: &str = "xr-platform";
