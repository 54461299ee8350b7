//! Output format selection and the rendered-view container.

use serde_json::Value;

use crate::error::{ReportError, Result};

/// The output format for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFormat {
    Text,
    Json,
}

impl ViewFormat {
    /// Parse a format name.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "text" | "human" => Ok(ViewFormat::Text),
            "json" => Ok(ViewFormat::Json),
            _ => Err(ReportError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// The output of one rendered report.
#[derive(Debug)]
pub struct ViewOutput {
    /// Terminal-friendly text rendering.
    pub text: String,
    /// Machine-readable JSON (always populated).
    pub data: Value,
}

impl ViewOutput {
    /// Render in the requested format.
    pub fn render(&self, format: ViewFormat) -> String {
        match format {
            ViewFormat::Text => self.text.clone(),
            ViewFormat::Json => serde_json::to_string_pretty(&self.data)
                .unwrap_or_else(|_| "{}".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_known_formats() {
        assert_eq!(ViewFormat::parse("text").unwrap(), ViewFormat::Text);
        assert_eq!(ViewFormat::parse("human").unwrap(), ViewFormat::Text);
        assert_eq!(ViewFormat::parse("json").unwrap(), ViewFormat::Json);
    }

    #[test]
    fn parse_unknown_format() {
        assert!(matches!(
            ViewFormat::parse("yaml").unwrap_err(),
            ReportError::UnknownFormat { .. }
        ));
    }

    #[test]
    fn render_selects_format() {
        let output = ViewOutput {
            text: "hello".into(),
            data: json!({"greeting": "hello"}),
        };
        assert_eq!(output.render(ViewFormat::Text), "hello");
        assert!(output.render(ViewFormat::Json).contains("\"greeting\""));
    }
}
