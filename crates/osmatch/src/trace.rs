use std::io::Write;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Env};

/// Installs the global subscriber, logging to `writer` through a background
/// thread. Pending lines are flushed when the returned guard is dropped.
pub fn init_tracing(config: &Config, writer: impl Write + Send + 'static) -> WorkerGuard {
  let (appender, guard) = tracing_appender::non_blocking(writer);

  let logging_formatter: Box<dyn Layer<Registry> + Send + Sync> = match config.env {
    #[cfg(not(test))]
    Env::Dev => fmt::layer().compact().with_writer(appender).with_ansi(true).boxed(),
    Env::Production => json_subscriber::layer()
      .with_writer(appender)
      .flatten_event(true)
      .flatten_span_list_on_top_level(true)
      .with_current_span(false)
      .with_span_list(false)
      .boxed(),

    #[cfg(test)]
    Env::Dev => fmt::layer().compact().with_writer(appender).with_ansi(false).boxed(),
  };

  let layers = EnvFilter::builder().try_from_env().unwrap_or_else(|_| EnvFilter::new("info")).and_then(logging_formatter);

  tracing_subscriber::registry().with(layers).init();

  guard
}
