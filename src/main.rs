use std::env;

use tracing_subscriber::EnvFilter;

use pairs::config::{GameConfig, flag_enabled};
use pairs::ui::app;

const DEBUG_ENV: &str = "PAIRS_DEBUG";

fn init_logging() {
    let debug = env::var(DEBUG_ENV).is_ok_and(|value| flag_enabled(&value));
    let default_filter = if debug { "pairs=debug" } else { "pairs=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn main() -> glib::ExitCode {
    init_logging();
    let config = GameConfig::load_or_default();
    app::run(config)
}
