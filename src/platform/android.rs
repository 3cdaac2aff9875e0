use super::PlatformPlugin;
use crate::chain::{ExtensionStruct, InstanceCreateExtension};
use crate::error::PlatformError;
use crate::extensions::KHR_ANDROID_CREATE_INSTANCE;
use crate::{GraphicsApi, Options, PlatformData};
use anyhow::{Context, Result};
use log::debug;
use std::ffi::c_void;
use std::ptr;
use std::sync::{Arc, Mutex, PoisonError};
use xr::sys::StructureType;

/// Layout of `XrInstanceCreateInfoAndroidKHR`
#[repr(C)]
#[derive(Debug)]
pub struct InstanceCreateInfoAndroid {
    pub ty: StructureType,
    pub next: *const c_void,
    pub application_vm: *mut c_void,
    pub application_activity: *mut c_void,
}

impl InstanceCreateInfoAndroid {
    pub const TYPE: StructureType = StructureType::INSTANCE_CREATE_INFO_ANDROID_KHR;
}

unsafe impl ExtensionStruct for InstanceCreateInfoAndroid {}

// SAFETY: `next` is always null and the handles are only read by the runtime.
unsafe impl Send for InstanceCreateInfoAndroid {}
unsafe impl Sync for InstanceCreateInfoAndroid {}

/// Plugin for Android, where the runtime needs the VM and activity before it can create an
/// instance.
pub struct AndroidPlatformPlugin {
    data: Arc<PlatformData>,
    create_info: InstanceCreateInfoAndroid,
    options: Mutex<Arc<Options>>,
}

/// Raw handles copied out of `PlatformData`
#[derive(Clone, Copy, Debug)]
struct Handles {
    application_vm: *mut c_void,
    application_activity: *mut c_void,
    jni_env: *mut c_void,
}

impl AndroidPlatformPlugin {
    #[cfg(target_os = "android")]
    pub fn new(options: Arc<Options>, data: Arc<PlatformData>) -> Result<Self> {
        let handles = Handles {
            application_vm: data.application_vm,
            application_activity: data.application_activity,
            jni_env: data.jni_env,
        };
        Self::with_handles(options, data, handles)
    }

    fn with_handles(
        options: Arc<Options>,
        data: Arc<PlatformData>,
        handles: Handles,
    ) -> Result<Self> {
        for (name, handle) in [
            ("application_vm", handles.application_vm),
            ("application_activity", handles.application_activity),
            ("jni_env", handles.jni_env),
        ] {
            if handle.is_null() {
                return Err(PlatformError::NullHandle(name).into());
            }
        }
        check_graphics(&options)?;

        let create_info = InstanceCreateInfoAndroid {
            ty: InstanceCreateInfoAndroid::TYPE,
            next: ptr::null(),
            application_vm: handles.application_vm,
            application_activity: handles.application_activity,
        };

        Ok(Self {
            data,
            create_info,
            options: Mutex::new(options),
        })
    }
}

fn check_graphics(options: &Options) -> Result<GraphicsApi, PlatformError> {
    match options.graphics_api()? {
        api @ (GraphicsApi::OpenGLES | GraphicsApi::Vulkan | GraphicsApi::Vulkan2) => Ok(api),
        api => Err(PlatformError::UnsupportedGraphicsApi {
            api,
            platform: "android",
        }),
    }
}

impl PlatformPlugin for AndroidPlatformPlugin {
    fn instance_create_extension(&self) -> Option<InstanceCreateExtension<'_>> {
        Some(InstanceCreateExtension::new(&self.create_info))
    }

    fn instance_extensions(&self) -> Vec<String> {
        vec![KHR_ANDROID_CREATE_INSTANCE.to_string()]
    }

    fn update_options(&self, options: Arc<Options>) -> Result<()> {
        let api = check_graphics(&options).context("Rejected options update")?;
        debug!("Android platform now configured for {}", api);
        *self.options.lock().unwrap_or_else(PoisonError::into_inner) = options;
        Ok(())
    }

    fn options(&self) -> Arc<Options> {
        self.options
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn platform_data(&self) -> &PlatformData {
        &self.data
    }
}
