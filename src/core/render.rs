//! Renderer module
//!
//! Renders resolved file entries as JSON Lines for `ctxpack list`.

use serde::Serialize;

/// Render configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }
}

/// Renderer for line-oriented JSON output
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render as JSON Lines (one JSON object per line)
    pub fn render_jsonl<T: Serialize>(&self, items: &[T]) -> String {
        items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }
}
