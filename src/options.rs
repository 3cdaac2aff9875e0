//! Application options that steer which platform behavior is needed.
use crate::error::PlatformError;
use std::fmt;
use std::str::FromStr;

/// Graphics API the application renders with
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GraphicsApi {
    D3D11,
    D3D12,
    OpenGLES,
    OpenGL,
    Vulkan2,
    Vulkan,
    Metal,
}

/// Kind of device the application targets
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FormFactor {
    #[default]
    Hmd,
    Handheld,
}

/// Number of views rendered per frame
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ViewConfiguration {
    Mono,
    #[default]
    Stereo,
}

/// How rendered layers are composited with the real world
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Opaque,
    Additive,
    AlphaBlend,
}

/// Reference space the application places content in
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AppSpace {
    View,
    Local,
    #[default]
    Stage,
}

impl GraphicsApi {
    const NAMES: &'static [(&'static str, Self)] = &[
        ("D3D11", Self::D3D11),
        ("D3D12", Self::D3D12),
        ("OpenGLES", Self::OpenGLES),
        ("OpenGL", Self::OpenGL),
        ("Vulkan2", Self::Vulkan2),
        ("Vulkan", Self::Vulkan),
        ("Metal", Self::Metal),
    ];

    /// Whether the compiled target can drive this graphics API at all
    pub fn available_on_target(self) -> bool {
        match self {
            Self::D3D11 | Self::D3D12 => cfg!(windows),
            Self::Metal => cfg!(any(target_os = "macos", target_os = "ios")),
            Self::OpenGL => cfg!(any(windows, target_os = "linux")),
            Self::OpenGLES => cfg!(any(target_os = "android", target_os = "linux")),
            Self::Vulkan | Self::Vulkan2 => {
                cfg!(any(windows, target_os = "linux", target_os = "android"))
            }
        }
    }
}

impl FormFactor {
    const NAMES: &'static [(&'static str, Self)] =
        &[("Hmd", Self::Hmd), ("Handheld", Self::Handheld)];

    pub fn to_xr(self) -> xr::FormFactor {
        match self {
            Self::Hmd => xr::FormFactor::HEAD_MOUNTED_DISPLAY,
            Self::Handheld => xr::FormFactor::HANDHELD_DISPLAY,
        }
    }
}

impl ViewConfiguration {
    const NAMES: &'static [(&'static str, Self)] =
        &[("Mono", Self::Mono), ("Stereo", Self::Stereo)];

    pub fn to_xr(self) -> xr::ViewConfigurationType {
        match self {
            Self::Mono => xr::ViewConfigurationType::PRIMARY_MONO,
            Self::Stereo => xr::ViewConfigurationType::PRIMARY_STEREO,
        }
    }
}

impl BlendMode {
    const NAMES: &'static [(&'static str, Self)] = &[
        ("Opaque", Self::Opaque),
        ("Additive", Self::Additive),
        ("AlphaBlend", Self::AlphaBlend),
    ];

    pub fn to_xr(self) -> xr::EnvironmentBlendMode {
        match self {
            Self::Opaque => xr::EnvironmentBlendMode::OPAQUE,
            Self::Additive => xr::EnvironmentBlendMode::ADDITIVE,
            Self::AlphaBlend => xr::EnvironmentBlendMode::ALPHA_BLEND,
        }
    }
}

impl AppSpace {
    const NAMES: &'static [(&'static str, Self)] =
        &[("View", Self::View), ("Local", Self::Local), ("Stage", Self::Stage)];
}

fn parse_named<T: Copy>(
    kind: &'static str,
    names: &[(&'static str, T)],
    value: &str,
) -> Result<T, PlatformError> {
    names
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, parsed)| *parsed)
        .ok_or_else(|| PlatformError::UnknownOption {
            kind,
            value: value.to_string(),
        })
}

fn name_of<T: PartialEq>(names: &[(&'static str, T)], value: &T) -> &'static str {
    names
        .iter()
        .find(|(_, v)| v == value)
        .map(|(name, _)| *name)
        .unwrap_or("?")
}

// Name tables double as the parse and display vocabulary.
macro_rules! named_option {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = PlatformError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_named($kind, Self::NAMES, s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(name_of(Self::NAMES, self))
            }
        }
    };
}

named_option!(GraphicsApi, "graphics plugin");
named_option!(FormFactor, "form factor");
named_option!(ViewConfiguration, "view configuration");
named_option!(BlendMode, "environment blend mode");
named_option!(AppSpace, "app space");

/// Everything the application lets the user choose. Shared with the platform plugin through an
/// `Arc`; a new value is handed over via `PlatformPlugin::update_options` when it changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// Graphics API to render with; required before any plugin is created
    pub graphics_plugin: Option<GraphicsApi>,
    pub form_factor: FormFactor,
    pub view_configuration: ViewConfiguration,
    pub environment_blend_mode: BlendMode,
    pub app_space: AppSpace,
}

impl Options {
    /// Options with only the graphics API chosen
    pub fn with_graphics(api: GraphicsApi) -> Self {
        Self {
            graphics_plugin: Some(api),
            ..Self::default()
        }
    }

    /// The selected graphics API, or a misconfiguration error if none was chosen.
    pub fn graphics_api(&self) -> Result<GraphicsApi, PlatformError> {
        self.graphics_plugin.ok_or(PlatformError::MissingGraphicsApi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("vulkan2".parse::<GraphicsApi>(), Ok(GraphicsApi::Vulkan2));
        assert_eq!("OPENGLES".parse::<GraphicsApi>(), Ok(GraphicsApi::OpenGLES));
        assert_eq!("handheld".parse::<FormFactor>(), Ok(FormFactor::Handheld));
        assert_eq!("alphablend".parse::<BlendMode>(), Ok(BlendMode::AlphaBlend));
        assert_eq!("local".parse::<AppSpace>(), Ok(AppSpace::Local));
        assert_eq!("Mono".parse::<ViewConfiguration>(), Ok(ViewConfiguration::Mono));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "Glide".parse::<GraphicsApi>().unwrap_err();
        assert_eq!(
            err,
            PlatformError::UnknownOption {
                kind: "graphics plugin",
                value: "Glide".to_string(),
            }
        );
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(GraphicsApi::OpenGLES.to_string(), "OpenGLES");
        assert_eq!(AppSpace::Stage.to_string(), "Stage");
    }

    #[test]
    fn defaults_follow_hmd_stereo_stage() {
        let options = Options::default();
        assert_eq!(options.graphics_plugin, None);
        assert_eq!(options.form_factor.to_xr(), xr::FormFactor::HEAD_MOUNTED_DISPLAY);
        assert_eq!(
            options.view_configuration.to_xr(),
            xr::ViewConfigurationType::PRIMARY_STEREO
        );
        assert_eq!(
            options.environment_blend_mode.to_xr(),
            xr::EnvironmentBlendMode::OPAQUE
        );
        assert_eq!(options.app_space, AppSpace::Stage);
    }

    #[test]
    fn missing_graphics_api_is_a_misconfiguration() {
        assert_eq!(
            Options::default().graphics_api(),
            Err(PlatformError::MissingGraphicsApi)
        );
        assert_eq!(
            Options::with_graphics(GraphicsApi::Vulkan).graphics_api(),
            Ok(GraphicsApi::Vulkan)
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_graphics_availability() {
        assert!(GraphicsApi::Vulkan2.available_on_target());
        assert!(GraphicsApi::OpenGLES.available_on_target());
        assert!(!GraphicsApi::D3D11.available_on_target());
        assert!(!GraphicsApi::Metal.available_on_target());
    }
}
