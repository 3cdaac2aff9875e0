//! Platform plugins. Wraps the platform-specific parts of instance creation so the rest of the
//! application stays platform-independent. Exactly one implementation is compiled in as the
//! target plugin; the Android one is also built for tests so host runs can exercise it.
use crate::chain::InstanceCreateExtension;
use crate::{Options, PlatformData};
use anyhow::Result;
use log::info;
use std::sync::Arc;

#[cfg(any(target_os = "android", test))]
mod android;
#[cfg(not(target_os = "android"))]
mod generic;

#[cfg(any(target_os = "android", test))]
pub use android::{AndroidPlatformPlugin, InstanceCreateInfoAndroid};
#[cfg(not(target_os = "android"))]
pub use generic::GenericPlatformPlugin;

#[cfg(target_os = "android")]
type TargetPlugin = AndroidPlatformPlugin;
#[cfg(not(target_os = "android"))]
type TargetPlugin = GenericPlatformPlugin;

/// Name of the platform this crate was compiled for
pub const TARGET_PLATFORM: &str = std::env::consts::OS;

/// What a platform needs injected into OpenXR instance creation.
pub trait PlatformPlugin: Send + Sync {
    /// Structure chain to hang off `XrInstanceCreateInfo::next`, if the platform needs one.
    /// Stays the same between calls and lives as long as the plugin.
    fn instance_create_extension(&self) -> Option<InstanceCreateExtension<'_>>;

    /// Instance extensions this platform requires. Duplicate-free and stable until the next
    /// `update_options`.
    fn instance_extensions(&self) -> Vec<String>;

    /// Re-derive cached state from new options. On error the previous options stay in effect.
    fn update_options(&self, options: Arc<Options>) -> Result<()>;

    /// Options currently in effect
    fn options(&self) -> Arc<Options>;

    /// Handles this plugin was built from
    fn platform_data(&self) -> &PlatformData;
}

/// Create the platform plugin for the platform selected at compile time.
pub fn create_platform_plugin(
    options: &Arc<Options>,
    data: &Arc<PlatformData>,
) -> Result<Arc<dyn PlatformPlugin>> {
    let plugin = TargetPlugin::new(options.clone(), data.clone())?;
    info!(
        "Created {} platform plugin, instance extensions: {:?}",
        TARGET_PLATFORM,
        plugin.instance_extensions()
    );
    Ok(Arc::new(plugin))
}

#[cfg(all(test, any(windows, target_os = "linux")))]
mod tests {
    use super::*;
    use crate::{GraphicsApi, PlatformError};

    #[test]
    fn factory_builds_target_plugin() {
        let options = Arc::new(Options::with_graphics(GraphicsApi::Vulkan2));
        let data = Arc::new(PlatformData::default());
        let plugin = create_platform_plugin(&options, &data).unwrap();
        assert!(Arc::ptr_eq(&plugin.options(), &options));
        assert!(std::ptr::eq(plugin.platform_data(), &*data));
    }

    #[test]
    fn factory_rejects_missing_graphics_api() {
        let options = Arc::new(Options::default());
        let data = Arc::new(PlatformData::default());
        let err = create_platform_plugin(&options, &data).err().unwrap();
        assert_eq!(
            err.downcast_ref::<PlatformError>(),
            Some(&PlatformError::MissingGraphicsApi)
        );
    }

    #[test]
    fn plugin_is_shareable() {
        let options = Arc::new(Options::with_graphics(GraphicsApi::Vulkan));
        let data = Arc::new(PlatformData::default());
        let plugin = create_platform_plugin(&options, &data).unwrap();
        let graphics_side = plugin.clone();
        assert_eq!(
            graphics_side.instance_extensions(),
            plugin.instance_extensions()
        );
        assert_eq!(Arc::strong_count(&plugin), 2);
    }
}
