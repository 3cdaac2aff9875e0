#[cfg(target_os = "android")]
use std::{ffi::c_void, ptr};

/// Platform handles needed at instance creation. Filled in by the platform's startup code before
/// any plugin is created, then only read. Empty on platforms that need nothing.
#[derive(Clone, Debug)]
pub struct PlatformData {
    /// `JavaVM*` of the process
    #[cfg(target_os = "android")]
    pub application_vm: *mut c_void,
    /// Global reference to the `android.app.Activity`
    #[cfg(target_os = "android")]
    pub application_activity: *mut c_void,
    /// `JNIEnv*` of the thread that started the application
    #[cfg(target_os = "android")]
    pub jni_env: *mut c_void,
}

impl Default for PlatformData {
    fn default() -> Self {
        Self {
            #[cfg(target_os = "android")]
            application_vm: ptr::null_mut(),
            #[cfg(target_os = "android")]
            application_activity: ptr::null_mut(),
            #[cfg(target_os = "android")]
            jni_env: ptr::null_mut(),
        }
    }
}

// SAFETY: the handles are never dereferenced by this crate, only forwarded to the OpenXR runtime.
unsafe impl Send for PlatformData {}
unsafe impl Sync for PlatformData {}
