mod cli;

use std::process::ExitCode;

use comicdesk_app::Desk;
use comicdesk_common::{ConfigError, DeskError, WindowId};
use comicdesk_config::{toml_loader, validation, DeskConfig};
use comicdesk_wm::WindowCommand;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "comicdesk=info";

fn load_config(args: &cli::Args) -> Result<DeskConfig, ConfigError> {
    match &args.config {
        Some(path) => {
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => comicdesk_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    let directive: Directive = directive
        .parse()
        .or_else(|_| DEFAULT_DIRECTIVE.parse())
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn run(args: &cli::Args, config: &DeskConfig) -> Result<String, DeskError> {
    let mut desk = Desk::new(config);
    let mut events = desk.subscribe();

    desk.resize(args.size);
    for window in args.windows() {
        if desk.open(&window).is_none() {
            tracing::warn!(kind = window.key(), "Window could not be opened");
        }
    }
    for id in &args.maximize {
        if !desk.command(WindowCommand::ToggleMaximize(WindowId::new(id.as_str()))) {
            tracing::warn!(%id, "Window not maximized");
        }
    }
    for id in &args.minimize {
        if !desk.command(WindowCommand::Minimize(WindowId::new(id.as_str()))) {
            tracing::warn!(%id, "Window not minimized");
        }
    }

    let snapshot = desk.snapshot();
    let json = serde_json::to_string_pretty(&snapshot)?;
    desk.shutdown();

    while let Ok(event) = events.try_recv() {
        tracing::debug!(?event, "Desk event");
    }
    Ok(json)
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read first so its log level can seed the subscriber.
    let loaded = load_config(&args);
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => format!("comicdesk={}", config.logging.level),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    tracing::info!("comicdesk v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DeskConfig::default()
    });

    match run(&args, &config) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("comicdesk failed: {e}");
            ExitCode::FAILURE
        }
    }
}
