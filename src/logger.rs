use env_logger::Env;

/// Environment variable overriding the log filter, e.g. `PROMPT_FORGE_LOG=debug`.
pub const LOG_ENV: &str = "PROMPT_FORGE_LOG";

/// Logging is off unless `--verbose` is given or `PROMPT_FORGE_LOG` is set,
/// so stdout and stderr carry only the tool's own output.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "off" };
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
