//! Application-side instance creation on top of a platform plugin.
use crate::extensions::{extension_set, merge_extensions};
use crate::{Options, PlatformPlugin};
use anyhow::{bail, ensure, format_err, Context, Result};
use log::{debug, info};
use std::ffi::CString;
use std::os::raw::c_char;
use std::path::Path;
use std::ptr;
use xr::sys;

/// Attempt to load the OpenXR loader first from OPENXR_LOADER, or the default location if no
/// environment variable is provided.
pub fn load_openxr() -> Result<xr::Entry> {
    let entry = match std::env::var_os("OPENXR_LOADER") {
        Some(path) => {
            info!("Loading OpenXR from {}", Path::new(&path).display());
            unsafe { xr::Entry::load_from(Path::new(&path)) }
        }
        None => unsafe { xr::Entry::load() },
    };
    entry.map_err(|e| format_err!("Failed to load OpenXR loader: {}", e))
}

/// Create an instance with the platform's extensions plus `extra_extensions`, chaining the
/// plugin's create extension (if any) onto `XrInstanceCreateInfo`.
pub fn create_instance(
    entry: &xr::Entry,
    application_name: &str,
    engine_name: &str,
    plugin: &dyn PlatformPlugin,
    extra_extensions: &[String],
) -> Result<xr::Instance> {
    let extensions = merge_extensions([
        plugin.instance_extensions().as_slice(),
        extra_extensions,
    ]);
    info!("Requesting instance extensions {:?}", extensions);

    let extension_names = extensions
        .iter()
        .map(|name| CString::new(name.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .context("Extension name contains a nul byte")?;
    let extension_ptrs = extension_names
        .iter()
        .map(|name| name.as_ptr())
        .collect::<Vec<_>>();

    let mut application_info = sys::ApplicationInfo {
        application_name: [0; sys::MAX_APPLICATION_NAME_SIZE],
        application_version: 0,
        engine_name: [0; sys::MAX_ENGINE_NAME_SIZE],
        engine_version: 0,
        api_version: xr::Version::new(1, 0, 0),
    };
    place_cstr(&mut application_info.application_name, application_name)?;
    place_cstr(&mut application_info.engine_name, engine_name)?;

    let chain = plugin.instance_create_extension();
    debug!("Instance create chain: {:?}", chain);

    let create_info = sys::InstanceCreateInfo {
        ty: sys::InstanceCreateInfo::TYPE,
        next: chain.map_or(ptr::null(), |chain| chain.as_ptr()),
        create_flags: sys::InstanceCreateFlags::EMPTY,
        application_info,
        enabled_api_layer_count: 0,
        enabled_api_layer_names: ptr::null(),
        enabled_extension_count: extension_ptrs.len() as u32,
        enabled_extension_names: extension_ptrs.as_ptr(),
    };

    let mut handle = sys::Instance::NULL;
    let result = unsafe { (entry.fp().create_instance)(&create_info, &mut handle) };
    if result.into_raw() < 0 {
        bail!("xrCreateInstance failed: {:?}", result);
    }

    let instance = unsafe {
        let exts = xr::InstanceExtensions::load(entry, handle, &extension_set(&extensions))?;
        xr::Instance::from_raw(entry.clone(), handle, exts)?
    };
    let props = instance.properties()?;
    info!(
        "Loaded OpenXR runtime: {} {}",
        props.runtime_name, props.runtime_version
    );
    Ok(instance)
}

/// Find the system for the configured form factor and check it supports the configured view
/// configuration and blend mode.
pub fn find_system(instance: &xr::Instance, options: &Options) -> Result<xr::SystemId> {
    let system = instance.system(options.form_factor.to_xr())?;

    let view_configuration = options.view_configuration.to_xr();
    let view_configurations = instance.enumerate_view_configurations(system)?;
    ensure!(
        view_configurations.contains(&view_configuration),
        "System does not support the {} view configuration",
        options.view_configuration
    );

    let blend_modes = instance.enumerate_environment_blend_modes(system, view_configuration)?;
    ensure!(
        blend_modes.contains(&options.environment_blend_mode.to_xr()),
        "System does not support the {} blend mode (available: {:?})",
        options.environment_blend_mode,
        blend_modes
    );
    Ok(system)
}

fn place_cstr(out: &mut [c_char], s: &str) -> Result<()> {
    ensure!(
        s.len() < out.len(),
        "`{}` is longer than {} bytes",
        s,
        out.len() - 1
    );
    ensure!(!s.bytes().any(|b| b == 0), "`{}` contains a nul byte", s);
    for (dst, &src) in out.iter_mut().zip(s.as_bytes()) {
        *dst = src as c_char;
    }
    out[s.len()] = 0;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn place_cstr_terminates() {
        let mut buf = [1 as c_char; 8];
        place_cstr(&mut buf, "hello").unwrap();
        let placed = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(placed.to_str().unwrap(), "hello");
    }

    #[test]
    fn place_cstr_rejects_overflow() {
        let mut buf = [0 as c_char; 4];
        assert!(place_cstr(&mut buf, "four").is_err());
        assert!(place_cstr(&mut buf, "abc").is_ok());
    }
}
