use anyhow::Result;
use clap::Parser;
use log::info;
use std::sync::Arc;
use xr_platform::{
    create_platform_plugin, instance, AppSpace, BlendMode, FormFactor, GraphicsApi, Options,
    PlatformData, ViewConfiguration, ENGINE_NAME,
};

/// Show what this platform contributes to OpenXR instance creation.
#[derive(Parser, Debug)]
#[command(name = "xr-platform")]
struct Args {
    /// Graphics API: D3D11, D3D12, OpenGLES, OpenGL, Vulkan2, Vulkan or Metal
    #[arg(short, long = "graphics")]
    graphics: GraphicsApi,
    /// Hmd or Handheld
    #[arg(short = 'f', long = "formfactor", default_value = "Hmd")]
    form_factor: FormFactor,
    /// Mono or Stereo
    #[arg(short = 'v', long = "viewconfig", default_value = "Stereo")]
    view_config: ViewConfiguration,
    /// Opaque, Additive or AlphaBlend
    #[arg(short = 'b', long = "blendmode", default_value = "Opaque")]
    blend_mode: BlendMode,
    /// View, Local or Stage
    #[arg(short = 's', long = "space", default_value = "Stage")]
    space: AppSpace,
    /// Create an instance through the installed OpenXR runtime
    #[arg(long)]
    create_instance: bool,
    /// Debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = Arc::new(Options {
        graphics_plugin: Some(args.graphics),
        form_factor: args.form_factor,
        view_configuration: args.view_config,
        environment_blend_mode: args.blend_mode,
        app_space: args.space,
    });
    let data = Arc::new(PlatformData::default());
    let plugin = create_platform_plugin(&options, &data)?;

    info!("Instance extensions: {:?}", plugin.instance_extensions());
    match plugin.instance_create_extension() {
        Some(chain) => info!("Instance create chain: {:?}", chain),
        None => info!("No instance create chain"),
    }

    if args.create_instance {
        let entry = instance::load_openxr()?;
        let xr_instance =
            instance::create_instance(&entry, "xr-platform", ENGINE_NAME, &*plugin, &[])?;
        let system = instance::find_system(&xr_instance, &options)?;
        let props = xr_instance.system_properties(system)?;
        info!("System: {}", props.system_name);
    }

    Ok(())
}
