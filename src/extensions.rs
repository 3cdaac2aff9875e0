/// Lets an Android application hand its VM and activity to the runtime
pub const KHR_ANDROID_CREATE_INSTANCE: &str = "XR_KHR_android_create_instance";

/// Concatenate extension lists, keeping the first occurrence of each name.
pub fn merge_extensions<'a>(lists: impl IntoIterator<Item = &'a [String]>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for name in lists.into_iter().flatten() {
        if !merged.contains(name) {
            merged.push(name.clone());
        }
    }
    merged
}

/// The `ExtensionSet` matching the names enabled at instance creation, so the instance wrapper
/// loads the function tables of every enabled extension. Names it has no flag for go to `other`.
pub fn extension_set(names: &[String]) -> xr::ExtensionSet {
    let mut set = xr::ExtensionSet::default();
    for name in names {
        match name.as_str() {
            "XR_KHR_vulkan_enable2" => set.khr_vulkan_enable2 = true,
            "XR_KHR_vulkan_enable" => set.khr_vulkan_enable = true,
            "XR_KHR_opengl_enable" => set.khr_opengl_enable = true,
            "XR_KHR_opengl_es_enable" => set.khr_opengl_es_enable = true,
            "XR_MNDX_egl_enable" => set.mndx_egl_enable = true,
            "XR_EXT_debug_utils" => set.ext_debug_utils = true,
            #[cfg(windows)]
            "XR_KHR_D3D11_enable" => set.khr_d3d11_enable = true,
            #[cfg(windows)]
            "XR_KHR_D3D12_enable" => set.khr_d3d12_enable = true,
            #[cfg(target_os = "android")]
            KHR_ANDROID_CREATE_INSTANCE => set.khr_android_create_instance = true,
            other => set.other.push(other.to_string()),
        }
    }
    set
}
