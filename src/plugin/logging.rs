// Logging setup for the unpotted reminder

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static LOG_GUARD: OnceLock<Vec<WorkerGuard>> = OnceLock::new();

/// Plain-text layer without ANSI colors or targets
fn plain_layer<S>(writer: NonBlocking) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
}

/// Install the global subscriber.
///
/// INFO by default (overridable through `RUST_LOG`), DEBUG for this crate.
/// Only the first call installs anything; a host that already set a global
/// subscriber keeps it.
///
/// # Arguments
/// * `enable_console` - Also write to stdout
/// * `log_file_path` - Also write to this file
pub fn init_logging(enable_console: bool, log_file_path: Option<PathBuf>) {
    if LOG_GUARD.get().is_some() {
        return;
    }

    let mut guards = Vec::new();

    let mut filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    if let Ok(directive) = "unpotted_reminder=debug".parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    let file_layer = log_file_path.and_then(|path| {
        let parent = path.parent()?;
        let file_name = path.file_name()?.to_str()?;

        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(parent, file_name));
        guards.push(guard);
        Some(plain_layer(writer))
    });

    let console_layer = enable_console.then(|| {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);
        plain_layer(writer)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    let _ = LOG_GUARD.set(guards);
}
