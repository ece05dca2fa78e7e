mod app_state;
mod cli;
mod logging;
mod ticker;

use std::process::ExitCode;

use haptics_config::schema::HapticsConfig;
use haptics_ingress::{Ingress, IngressSettings};
use winit::event_loop::EventLoop;

fn main() -> ExitCode {
    let args = match cli::parse() {
        cli::Invocation::Run(args) => args,
        cli::Invocation::Exit(code) => return code,
    };

    // The config may set the log level, so read it before logging starts and
    // report the outcome afterwards.
    let loaded = haptics_config::load_config(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    logging::init(args.log_level.as_deref(), config_level);

    tracing::info!("Haptics visualizer v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = match loaded {
        Ok(config) => {
            // Loader diagnostics ran before the subscriber existed.
            if let Err(e) = haptics_config::validation::validate(&config) {
                tracing::warn!("Config has invalid values, using them anyway: {e}");
            }
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            HapticsConfig::default()
        }
    };
    tracing::info!(
        "Config loaded (local port {}, remote {}:{})",
        config.network.local_port,
        args.host,
        config.network.remote_port
    );

    let settings = IngressSettings::from_config(&config.network, &config.transform, &args.host);
    let ingress = match Ingress::connect(settings) {
        Ok(ingress) => ingress,
        Err(e) => {
            tracing::error!("Failed to set up position ingress: {e}");
            return ExitCode::FAILURE;
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::HapticsApp::new(config, ingress);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");

    app.exit_code()
}
