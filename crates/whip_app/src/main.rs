mod app;
mod effects;
mod keys;

use clap::Parser;
use whip_core::{Platform, SessionState};

/// Resolve a music link into its equivalent on another streaming platform.
#[derive(Debug, Parser)]
#[command(name = "whiplink", version, about)]
struct Cli {
    /// Track or album URL to resolve; skips the input prompt.
    source_url: Option<String>,
    /// Target platform slug (e.g. spotify, apple, tidal); skips the
    /// chooser. Unrecognized slugs fall back to interactive selection.
    platform: Option<String>,
}

impl Cli {
    /// Both arguments present and valid: the session can go straight
    /// into the lookup without any interaction.
    fn fast_forwards(&self) -> bool {
        self.source_url.as_deref().is_some_and(|url| !url.trim().is_empty())
            && self
                .platform
                .as_deref()
                .and_then(Platform::by_slug)
                .is_some()
    }
}

fn main() {
    let cli = Cli::parse();
    whip_logging::init_diagnostic_log(whip_logging::LOG_PATH);

    let state = SessionState::with_seed(cli.source_url.as_deref(), cli.platform.as_deref());
    let auto_submit = cli.fast_forwards();

    if let Err(err) = app::run(state, auto_submit) {
        log::error!("terminal driver failed: {err}");
        eprintln!("whiplink: {err}");
        std::process::exit(1);
    }
    log::logger().flush();
}
