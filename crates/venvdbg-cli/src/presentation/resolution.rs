//! Rendering of a single resolution result.

use venvdbg_core::ResolutionResult;

/// How `resolve` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `key = value` lines.
    #[default]
    Text,
    /// Serialized result.
    Json,
    /// Identifier only, for `$(venvdbg resolve -q ...)`.
    Quiet,
}

impl OutputFormat {
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        if json {
            Self::Json
        } else if quiet {
            Self::Quiet
        } else {
            Self::Text
        }
    }
}

/// Render a result for stdout.
pub fn render_resolution(
    result: &ResolutionResult,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Text => result.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Quiet => result.identifier.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched() -> ResolutionResult {
        ResolutionResult {
            identifier: "/tmp/envA".to_string(),
            matched_test_name: Some("test_bar:2".to_string()),
            source: None,
        }
    }

    #[test]
    fn flags_pick_format() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Text);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
    }

    #[test]
    fn quiet_is_identifier_only() {
        let out = render_resolution(&matched(), OutputFormat::Quiet).unwrap();
        assert_eq!(out, "/tmp/envA");
    }

    #[test]
    fn json_round_trips_fields() {
        let out = render_resolution(&matched(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["identifier"], "/tmp/envA");
        assert_eq!(value["matched_test_name"], "test_bar:2");
    }
}
