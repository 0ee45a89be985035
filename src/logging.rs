use tracing::Level;

/// Plain line-oriented logging to stdout.
pub fn init_logging(verbose: bool) {
  let level = if verbose { Level::DEBUG } else { Level::INFO };

  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(std::io::stdout)
    .without_time()
    .with_level(false)
    .with_target(false)
    .with_ansi(false)
    .init();
}
