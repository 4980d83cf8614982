use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use neon_launcher::config::{self, Settings};
use neon_launcher::entry::LauncherState;
use neon_launcher::loader;
use neon_launcher::navigate::SystemNavigator;
use neon_launcher::render::{self, HtmlOptions};
use neon_launcher::tiles;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the rendered page
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = config::command().get_matches();
    let settings = Settings::from_matches(&matches)?;
    info!("Rendering {} with the {} backend", settings.source, settings.mode);

    // Step 1: Load once; any failure settles to the empty state
    let state = LauncherState::settle(loader::load(&settings.source, settings.timeout).await);

    // Step 2: Build tiles from the snapshot
    let tiles = tiles::build(&state);

    // Step 3: Single render pass
    let options = HtmlOptions {
        output: settings.output.as_deref(),
        fragment: settings.fragment,
    };
    render::render(&tiles, settings.mode, options, &SystemNavigator)
}
