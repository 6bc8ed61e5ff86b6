/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "funannotate=info";

/// Initialize env_logger on stderr. Safe to call more than once; later
/// calls are no-ops. Stdout is left to help text and reports.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .format_module_path(false)
        .target(env_logger::Target::Stderr)
        .try_init();
}
