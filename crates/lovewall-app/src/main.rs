mod app_state;
mod cli;

use tokio::sync::mpsc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use lovewall_config::LoveWallConfig;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/lovewall-app/
        manifest_dir.join("..").join("..").join(".env"),
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn apply_overrides(config: &mut LoveWallConfig, args: &cli::Args) {
    if let Some(seed) = args.seed {
        config.wall.seed = Some(seed);
    }
    if let Some(ref user) = args.user {
        config.session.default_user = user.clone();
    }
    if args.offline {
        config.ai.enabled = false;
    }
}

fn load(args: &cli::Args) -> lovewall_common::Result<LoveWallConfig> {
    let config = lovewall_config::load_config(args.config.as_deref())?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    load_dotenv();

    let args = cli::parse();

    // Logging needs the config's level, so keep the load error for later.
    let loaded = load(&args);
    let level = match loaded {
        Ok(ref config) => config.logging.level.as_directive(),
        Err(_) => "info",
    };
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("lovewall={level}"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            log_directive
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        ))
        .init();

    tracing::info!("LoveWall v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        LoveWallConfig::default()
    });
    apply_overrides(&mut config, &args);

    if args.print_config {
        println!("{}", lovewall_config::config_to_json(&config));
        return;
    }

    let client = app_state::build_client(&config.ai);
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let app = app_state::LoveWallApp::new(config, client, events_tx);

    tracing::info!("Entering event loop");
    app.run(events_rx).await;
    tracing::info!("Shutdown complete");
}
