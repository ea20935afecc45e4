use tracing_subscriber::EnvFilter;

/// tracingを初期化（`RUST_LOG` 優先、`--verbose` で既定をdebugに）
pub fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vividhands={0},vividhands_common={0}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
