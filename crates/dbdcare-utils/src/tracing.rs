use sentry::ClientInitGuard;
use sentry_tracing::EventFilter;
use std::borrow::Cow;
use thiserror::Error;
use tracing_core::{Level, LevelFilter};
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug)]
pub struct TracingConfig {
    // Filled in by the binary so the sentry release names the binary, not this crate.
    pub package: &'static str,
    pub version: &'static str,
    #[builder(default)]
    pub sentry_dsn: Option<String>,
    #[builder(setter(into), default = String::from("dev"))]
    pub env: String,
    /// Default level when `RUST_LOG` is unset.
    #[builder(default = LevelFilter::INFO)]
    pub default_level: LevelFilter,
    /// Interactive binaries keep stdout for their own output.
    #[builder(default)]
    pub stderr: bool,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the sentry client alive. Dropping it flushes pending events.
pub struct TracingGuard {
    _sentry: ClientInitGuard,
}

fn event_filter(level: &Level) -> EventFilter {
    match *level {
        Level::ERROR => EventFilter::Event,
        Level::TRACE => EventFilter::Ignore,
        _ => EventFilter::Breadcrumb,
    }
}

pub fn setup(config: TracingConfig) -> Result<TracingGuard, Error> {
    let guard = sentry::init((
        config.sentry_dsn,
        sentry::ClientOptions {
            release: Some(Cow::Owned(format!("{}@{}", config.package, config.version))),
            environment: Some(Cow::Owned(config.env)),
            ..Default::default()
        },
    ));

    let sentry_layer = sentry_tracing::layer().event_filter(|md| event_filter(md.level()));

    let fmt_layer = if config.stderr {
        tracing_subscriber::fmt::layer().with_writer(std::io::stderr).boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            EnvFilter::builder()
                .with_default_directive(config.default_level.into())
                .from_env_lossy(),
        )
        .with(sentry_layer)
        .try_init()?;

    Ok(TracingGuard { _sentry: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_filter() {
        assert!(matches!(event_filter(&Level::ERROR), EventFilter::Event));
        assert!(matches!(event_filter(&Level::WARN), EventFilter::Breadcrumb));
        assert!(matches!(event_filter(&Level::TRACE), EventFilter::Ignore));
    }

    #[test]
    fn test_config_defaults() {
        let config = TracingConfig::builder().package("dbdcare").version("0.0.0").build();
        assert_eq!(config.env, "dev");
        assert!(config.sentry_dsn.is_none());
        assert_eq!(config.default_level, LevelFilter::INFO);
        assert!(!config.stderr);
    }
}
