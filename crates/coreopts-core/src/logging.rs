//! Subscriber setup for hosts that do not install their own.
//!
//! `COREOPTS_LOG` takes an env-filter directive (`coreopts_core=debug`);
//! `COREOPTS_LOG_FORMAT=json` switches to one JSON object per line.

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Filter directive variable.
pub const ENV_LOG: &str = "COREOPTS_LOG";
/// Output format variable (`json` or `plain`).
pub const ENV_LOG_FORMAT: &str = "COREOPTS_LOG_FORMAT";
/// Directive used when `COREOPTS_LOG` is unset or does not parse.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Line format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; anything else is plain.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Plain
        }
    }
}

/// Filter and format read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directive: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Settings from `get_env`, defaulting to `warn` and plain lines.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            directive: get_env(ENV_LOG).unwrap_or_else(|| DEFAULT_DIRECTIVE.to_owned()),
            format: get_env(ENV_LOG_FORMAT).map_or_else(LogFormat::default, |v| LogFormat::parse(&v)),
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
    }

    /// A subscriber writing to `writer` in the selected format.
    pub fn subscriber<W>(&self, writer: W) -> Box<dyn Subscriber + Send + Sync>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(writer);
        match self.format {
            LogFormat::Json => Box::new(builder.json().finish()),
            LogFormat::Plain => Box::new(builder.finish()),
        }
    }
}

/// Install `settings` as the global subscriber, writing to stderr.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init(settings: &LogSettings) -> bool {
    tracing::subscriber::set_global_default(settings.subscriber(std::io::stderr)).is_ok()
}

/// Install a global subscriber configured from the process environment.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_from_env() -> bool {
    init(&LogSettings::from_env_with(|key| std::env::var(key).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn settings(pairs: &[(&str, &str)]) -> LogSettings {
        LogSettings::from_env_with(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_owned())
        })
    }

    fn emit(settings: &LogSettings) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = settings.subscriber(move || writer.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden at warn");
            tracing::warn!(kind = "options_v2", "core options not registered");
        });
        captured.text()
    }

    #[test]
    fn format_follows_environment() {
        assert_eq!(settings(&[]).format, LogFormat::Plain);
        assert_eq!(settings(&[]).directive, DEFAULT_DIRECTIVE);
        assert_eq!(settings(&[(ENV_LOG_FORMAT, "JSON")]).format, LogFormat::Json);
        assert_eq!(settings(&[(ENV_LOG_FORMAT, "plain")]).format, LogFormat::Plain);
        assert_eq!(settings(&[(ENV_LOG_FORMAT, "yaml")]).format, LogFormat::Plain);
        assert_eq!(
            settings(&[(ENV_LOG, "coreopts_core=debug")]).directive,
            "coreopts_core=debug"
        );
    }

    #[test]
    fn json_format_writes_objects() {
        let out = emit(&settings(&[(ENV_LOG_FORMAT, "json")]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1, "{out}");
        assert!(lines[0].starts_with('{') && lines[0].ends_with('}'), "{out}");
        assert!(lines[0].contains("\"message\":\"core options not registered\""), "{out}");
        assert!(lines[0].contains("\"kind\":\"options_v2\""), "{out}");
    }

    #[test]
    fn plain_format_writes_lines() {
        let out = emit(&settings(&[]));
        assert_eq!(out.lines().count(), 1, "{out}");
        assert!(out.contains("core options not registered"), "{out}");
        assert!(!out.starts_with('{'), "{out}");
    }

    #[test]
    fn unparsable_directive_falls_back_to_warn() {
        let out = emit(&settings(&[(ENV_LOG, "coreopts_core=loud")]));
        assert!(out.contains("core options not registered"), "{out}");
        assert!(!out.contains("hidden at warn"), "{out}");
    }

    #[test]
    fn global_subscriber_installs_once() {
        let settings = settings(&[(ENV_LOG_FORMAT, "json")]);
        assert!(init(&settings));
        assert!(!init(&settings));
        assert!(!init_from_env());
    }
}
