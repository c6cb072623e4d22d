//! Output formatting for route and landmark results.
//!
//! Route waypoints always go out as CSV. The human-facing summary and the
//! landmark report follow the selected [`OutputFormat`].

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use roadroute_lib::{InterestPoint, NodeId, RouteRenderMode, RouteSummary};

/// Summary format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines.
    #[default]
    Text,
    /// Pretty-printed JSON documents.
    Json,
}

impl OutputFormat {
    pub fn render_mode(self) -> RouteRenderMode {
        match self {
            OutputFormat::Text => RouteRenderMode::PlainText,
            OutputFormat::Json => RouteRenderMode::Json,
        }
    }

    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Write a rendered route summary followed by a newline.
pub fn write_route_summary<W: Write>(
    summary: &RouteSummary,
    format: OutputFormat,
    mut writer: W,
) -> anyhow::Result<()> {
    let rendered = summary.render(format.render_mode())?;
    writeln!(writer, "{rendered}")?;
    Ok(())
}

/// Everything the `landmark` command reports about one name.
#[derive(Debug, Clone, Serialize)]
pub struct LandmarkReport {
    pub name: String,
    pub node: NodeId,
    pub latitude: f64,
    pub longitude: f64,
    pub points: Vec<InterestPoint>,
}

impl LandmarkReport {
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "{} -> node {} ({:.6}, {:.6})",
            self.name, self.node, self.latitude, self.longitude
        );
        for point in &self.points {
            out.push_str(&format!("\n  {}: {}", point.name, point.category));
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write a landmark report in the requested format.
pub fn write_landmark_report<W: Write>(
    report: &LandmarkReport,
    format: OutputFormat,
    mut writer: W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", report.render_text()),
        OutputFormat::Json => {
            let json = report.render_json().map_err(io::Error::other)?;
            writeln!(writer, "{json}")
        }
    }
}

/// Message shown when a landmark name is not in the index.
pub fn format_unknown_landmark_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown landmark '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadroute_lib::InterestCategory;

    fn report() -> LandmarkReport {
        LandmarkReport {
            name: "Trondheim".to_string(),
            node: 3,
            latitude: 63.4305,
            longitude: 10.3951,
            points: vec![InterestPoint {
                node: 3,
                category: InterestCategory(InterestCategory::PLACE_NAME.0 | 8),
                name: "Trondheim".to_string(),
            }],
        }
    }

    #[test]
    fn unknown_landmark_without_suggestions() {
        assert_eq!(
            format_unknown_landmark_message("Nowhere", &[]),
            "Unknown landmark 'Nowhere'."
        );
    }

    #[test]
    fn unknown_landmark_with_single_suggestion() {
        let message = format_unknown_landmark_message("Trondhiem", &["Trondheim".to_string()]);
        assert_eq!(
            message,
            "Unknown landmark 'Trondhiem'. Did you mean 'Trondheim'?"
        );
    }

    #[test]
    fn unknown_landmark_with_several_suggestions() {
        let suggestions = vec!["Oslo".to_string(), "Oslo S".to_string()];
        let message = format_unknown_landmark_message("Olso", &suggestions);
        assert!(message.ends_with("Did you mean one of: 'Oslo', 'Oslo S'?"));
    }

    #[test]
    fn landmark_text_lists_categories() {
        let text = report().render_text();
        assert!(text.starts_with("Trondheim -> node 3 (63.430500, 10.395100)"));
        assert!(text.contains("place name"));
        assert!(text.contains("eating"));
    }

    #[test]
    fn landmark_json_is_parseable() {
        let mut buffer = Vec::new();
        write_landmark_report(&report(), OutputFormat::Json, &mut buffer).expect("writes");
        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
        assert_eq!(value["node"], 3);
        assert_eq!(value["points"][0]["name"], "Trondheim");
    }

    #[test]
    fn format_maps_to_render_mode() {
        assert_eq!(OutputFormat::Text.render_mode(), RouteRenderMode::PlainText);
        assert!(OutputFormat::Json.is_json());
    }
}
