use std::env;

use serde::{Deserialize, Serialize};

fn default_render_pause_ms() -> u64 {
    500
}

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause after a commit so the acknowledgment is seen before redraw
    #[serde(default = "default_render_pause_ms")]
    pub render_pause_ms: u64,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            render_pause_ms: default_render_pause_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        let render_pause_ms = env::var("LEXIS_RENDER_PAUSE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_render_pause_ms);

        let channel_capacity = env::var("LEXIS_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&c: &usize| c > 0)
            .unwrap_or_else(default_channel_capacity);

        Self {
            render_pause_ms,
            channel_capacity,
        }
    }
}
