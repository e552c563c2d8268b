use std::path::Path;

/// Keeps the non-blocking log writer alive; flushes on drop.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the tracing subscriber.
///
/// With `log_dir`, events go to `namebatch-trace.jsonl` in that directory as
/// JSON lines; otherwise to stderr. Filter defaults to `cumber_core=debug`
/// and honors `RUST_LOG`.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) -> TraceGuard {
    use tracing_subscriber::EnvFilter;

    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("cumber_core=debug,cumber_cli=debug"))
    };

    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "namebatch-trace.jsonl");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                .with_env_filter(filter())
                .init();
            TraceGuard {
                _guard: Some(guard),
            }
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_env_filter(filter())
                .init();
            TraceGuard { _guard: None }
        }
    }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&Path>) -> TraceGuard {
    TraceGuard {}
}
