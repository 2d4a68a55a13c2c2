//! Left Click replay - runs a scripted host session against the engine.
//!
//! Usage: `leftclick-replay <script.json>`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leftclick_engine::api::{Replay, ReplayScript};
use leftclick_engine::infrastructure::config_store::{InMemoryConfigStore, JsonFileConfigStore};
use leftclick_engine::infrastructure::ports::{ConfigStorePort, ItemVariationPort};
use leftclick_engine::infrastructure::scripted_host::RecordingMenuManager;
use leftclick_engine::infrastructure::settings::EngineSettings;
use leftclick_engine::infrastructure::variation::VariationTable;
use leftclick_engine::{App, Ports};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leftclick_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let script_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: leftclick-replay <script.json>")?;

    let settings = EngineSettings::from_env();
    let widgets = settings.container_widgets()?;

    let config: Arc<dyn ConfigStorePort> = match &settings.store_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using JSON preference store");
            Arc::new(JsonFileConfigStore::open(path)?)
        }
        None => {
            tracing::info!("LEFTCLICK_STORE_PATH not set, preferences are kept in memory");
            Arc::new(InMemoryConfigStore::new())
        }
    };

    let variations: Arc<dyn ItemVariationPort> = match &settings.variations_path {
        Some(path) => Arc::new(VariationTable::load(path)?),
        None => Arc::new(VariationTable::empty()),
    };

    let raw = std::fs::read_to_string(&script_path)
        .with_context(|| format!("reading replay script {}", script_path.display()))?;
    let script = ReplayScript::from_json_str(&raw)
        .with_context(|| format!("parsing replay script {}", script_path.display()))?;

    let containers = Arc::new(script.scripted_containers());
    let ports = Ports {
        containers: containers.clone(),
        variations,
        config,
        menus: Arc::new(RecordingMenuManager::new()),
    };
    let app = App::new(ports, widgets, &settings.config_group);

    tracing::info!(
        events = script.events.len(),
        group = %settings.config_group,
        "Replaying host session"
    );

    let mut replay = Replay::new(app, containers);
    for (step, event) in script.events.into_iter().enumerate() {
        let report = replay.apply(event);
        print!("[{}] {}", step, report);
    }

    Ok(())
}

/// Load `.env.local` then `.env` from the workspace root; earlier files win.
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
