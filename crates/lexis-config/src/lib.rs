use std::env;

use serde::{Deserialize, Serialize};

use self::source::SourceConfig;
use self::ui::UiConfig;

pub mod source;
pub mod ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub ui: UiConfig,
    pub log_format: LogFormat,
}

impl Config {
    pub fn new() -> Self {
        let log_format = match env::var("LEXIS_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Config {
            source: SourceConfig::new(),
            ui: UiConfig::new(),
            log_format,
        }
    }

    /// Apply command line overrides on top of the environment
    pub fn with_overrides(mut self, url: Option<String>, render_pause_ms: Option<u64>) -> Self {
        if let Some(url) = url {
            tracing::debug!("Source URL overridden: {}", url);
            self.source.url = url;
        }
        if let Some(pause) = render_pause_ms {
            self.ui.render_pause_ms = pause;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.source.url, source::DEFAULT_SOURCE_URL);
        assert_eq!(config.source.timeout_secs, None);
        assert_eq!(config.ui.render_pause_ms, 500);
        assert_eq!(config.ui.channel_capacity, 64);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"ui": {"render_pause_ms": 0}, "log_format": "json"}"#)
                .unwrap();

        assert_eq!(config.ui.render_pause_ms, 0);
        assert_eq!(config.ui.channel_capacity, 64);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let config = Config::default().with_overrides(Some("http://localhost/x.json".into()), None);

        assert_eq!(config.source.url, "http://localhost/x.json");
        assert_eq!(config.ui.render_pause_ms, 500);
    }
}
