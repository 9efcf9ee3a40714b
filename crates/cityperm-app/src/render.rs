//! Render use case: turn a report into the requested output format.

use crate::report::{serialize_report, to_renderable};
use cityperm_types::PermissionReport;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            other => anyhow::bail!("unknown format: {other} (expected text|json|md)"),
        }
    }
}

pub fn render_report(report: &PermissionReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(cityperm_render::render_text(&to_renderable(report))),
        OutputFormat::Markdown => Ok(cityperm_render::render_markdown(&to_renderable(report))),
        OutputFormat::Json => {
            let mut text = String::from_utf8(serialize_report(report)?)?;
            text.push('\n');
            Ok(text)
        }
    }
}
