use crate::RenderableReport;

/// Render one `NAME Permissions:` block per distributor, blocks separated by a blank line.
///
/// Line format: `{city}, {province}, {country}: {true|false}`
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    for (i, block) in report.blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} Permissions:\n", block.name));
        for d in &block.decisions {
            out.push_str(&format!(
                "{}, {}, {}: {}\n",
                d.city, d.province, d.country, d.permitted
            ));
        }
    }

    out
}
