use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::sync::OnceLock;

static LOG_INIT: OnceLock<()> = OnceLock::new();

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Human-readable logs on stderr. Safe to call more than once.
pub fn setup_logging(default_level: &str) {
    LOG_INIT.get_or_init(|| {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        let _ = tracing_subscriber::registry()
            .with(env_filter(default_level))
            .with(fmt_layer)
            .try_init();
    });
}

/// JSON logs on stderr, for log shippers.
pub fn setup_logging_json(default_level: &str) {
    LOG_INIT.get_or_init(|| {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        let _ = tracing_subscriber::registry()
            .with(env_filter(default_level))
            .with(json_layer)
            .try_init();
    });
}

#[macro_export]
macro_rules! log_quote {
    ($level:ident, $tier:expr, $($arg:tt)*) => {
        tracing::$level!(
            target: "quote",
            tier = %$tier,
            $($arg)*
        );
    };
}
