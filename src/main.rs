//! voxray - renders one frame of the voxel/ray scene to a PNG
//!
//! Configuration comes from `config/` and `VOXRAY_*` environment variables;
//! see `config/default.toml`.

use std::process::ExitCode;

use voxray::config::AppConfig;
use voxray::output::save_png;
use voxray::scene::SceneBuilder;
use voxray::systems::RenderSystem;

fn main() -> ExitCode {
    // The log filter comes from config, so load it before logging starts
    let loaded = AppConfig::load();
    let log_level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => AppConfig::default().debug.log_level,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting voxray");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let scene = SceneBuilder::from_config(&config.scene)
        .load_atlas(config.rendering.atlas_path.as_deref(), config.rendering.atlas_cells)
        .build();
    log::info!(
        "Scene ready: {} chunk(s), tracing chunk at {:?}",
        scene.universe.chunk_count(),
        scene.chunk_origin
    );

    let mut render = RenderSystem::new(
        &config.viewport,
        &config.camera,
        &config.rendering,
        &config.pass_chain(),
    );

    if let Err(e) = render.render_frame(&scene) {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }

    match save_png(render.framebuffer(), &config.rendering.output_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
