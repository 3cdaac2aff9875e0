use super::{PlatformPlugin, TARGET_PLATFORM};
use crate::chain::InstanceCreateExtension;
use crate::error::PlatformError;
use crate::{Options, PlatformData};
use anyhow::{Context, Result};
use log::debug;
use std::sync::{Arc, Mutex, PoisonError};

/// Plugin for desktop platforms (Win32, Xlib, Wayland, plain POSIX). None of them need anything
/// chained into instance creation or any platform-level extension; graphics-binding extensions
/// such as `XR_MNDX_egl_enable` come from the graphics side.
pub struct GenericPlatformPlugin {
    data: Arc<PlatformData>,
    state: Mutex<State>,
}

struct State {
    options: Arc<Options>,
    extensions: Vec<String>,
}

impl GenericPlatformPlugin {
    pub fn new(options: Arc<Options>, data: Arc<PlatformData>) -> Result<Self> {
        let extensions = required_extensions(&options)?;
        Ok(Self {
            data,
            state: Mutex::new(State {
                options,
                extensions,
            }),
        })
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn required_extensions(options: &Options) -> Result<Vec<String>, PlatformError> {
    let api = options.graphics_api()?;
    if !api.available_on_target() {
        return Err(PlatformError::UnsupportedGraphicsApi {
            api,
            platform: TARGET_PLATFORM,
        });
    }
    Ok(Vec::new())
}

impl PlatformPlugin for GenericPlatformPlugin {
    fn instance_create_extension(&self) -> Option<InstanceCreateExtension<'_>> {
        None
    }

    fn instance_extensions(&self) -> Vec<String> {
        self.state().extensions.clone()
    }

    fn update_options(&self, options: Arc<Options>) -> Result<()> {
        let extensions = required_extensions(&options).context("Rejected options update")?;
        debug!("Platform extensions now {:?}", extensions);
        let mut state = self.state();
        state.options = options;
        state.extensions = extensions;
        Ok(())
    }

    fn options(&self) -> Arc<Options> {
        self.state().options.clone()
    }

    fn platform_data(&self) -> &PlatformData {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphicsApi;

    fn plugin(api: GraphicsApi) -> GenericPlatformPlugin {
        GenericPlatformPlugin::new(
            Arc::new(Options::with_graphics(api)),
            Arc::new(PlatformData::default()),
        )
        .unwrap()
    }

    #[cfg(any(windows, target_os = "linux"))]
    #[test]
    fn no_create_extension_on_repeated_calls() {
        let plugin = plugin(GraphicsApi::Vulkan2);
        assert!(plugin.instance_create_extension().is_none());
        assert!(plugin.instance_create_extension().is_none());
    }

    #[cfg(any(windows, target_os = "linux"))]
    #[test]
    fn vulkan_needs_no_platform_extensions() {
        let plugin = plugin(GraphicsApi::Vulkan);
        assert!(plugin.instance_extensions().is_empty());
        assert_eq!(plugin.instance_extensions(), plugin.instance_extensions());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn gles_adds_no_platform_extensions() {
        let plugin = plugin(GraphicsApi::Vulkan2);
        plugin
            .update_options(Arc::new(Options::with_graphics(GraphicsApi::OpenGLES)))
            .unwrap();
        assert!(plugin.instance_extensions().is_empty());
        assert_eq!(plugin.options().graphics_plugin, Some(GraphicsApi::OpenGLES));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn update_to_unsupported_api_is_rejected() {
        let plugin = plugin(GraphicsApi::Vulkan2);
        let err = plugin
            .update_options(Arc::new(Options::with_graphics(GraphicsApi::Metal)))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<PlatformError>(),
            Some(&PlatformError::UnsupportedGraphicsApi {
                api: GraphicsApi::Metal,
                platform: "linux",
            })
        );
        assert_eq!(plugin.options().graphics_plugin, Some(GraphicsApi::Vulkan2));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn unsupported_api_fails_fast() {
        let err = GenericPlatformPlugin::new(
            Arc::new(Options::with_graphics(GraphicsApi::D3D11)),
            Arc::new(PlatformData::default()),
        )
        .err()
        .unwrap();
        assert_eq!(
            err.downcast_ref::<PlatformError>(),
            Some(&PlatformError::UnsupportedGraphicsApi {
                api: GraphicsApi::D3D11,
                platform: "linux",
            })
        );
    }

    #[cfg(any(windows, target_os = "linux"))]
    #[test]
    fn rejected_update_keeps_previous_options() {
        let plugin = plugin(GraphicsApi::Vulkan);
        let err = plugin.update_options(Arc::new(Options::default())).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PlatformError>(),
            Some(&PlatformError::MissingGraphicsApi)
        );
        assert_eq!(plugin.options().graphics_plugin, Some(GraphicsApi::Vulkan));
    }
}
