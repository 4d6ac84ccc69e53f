//! Logger initialisation for the command-line binary

use log::LevelFilter;

/// Initialise the `env_logger` backend
///
/// `verbose` lowers the default level to `Debug`, `quiet` raises it to
/// `Warn`. An explicit `RUST_LOG` overrides both. Calling this more than
/// once keeps the first logger.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = default_level(verbose, quiet);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

/// Level used when `RUST_LOG` is unset
pub const fn default_level(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}
