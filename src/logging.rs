//! Log to a file: the alternate screen owns the terminal.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "rapp.log";

/// Install the global subscriber writing to `dir/rapp.log`. `RUST_LOG` wins
/// over the default level. Keep the guard alive until exit so buffered lines
/// get flushed. Returns `None` if the directory cannot be created.
pub fn init(dir: &Path, debug: bool) -> Option<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("rapp: logging disabled, could not create {}: {e}", dir.display());
        return None;
    }
    let default = if debug { "rapp_tui=debug" } else { "rapp_tui=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Some(guard)
}
