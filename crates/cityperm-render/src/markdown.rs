use crate::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Cityperm report\n\n");
    out.push_str(&format!(
        "- Distributors: {}\n- Locations: {}\n- Permitted: {} / {} decisions\n\n",
        report.blocks.len(),
        report.data.locations_scanned,
        report.data.permitted_total,
        report.data.decisions_total
    ));

    if report.blocks.is_empty() {
        out.push_str("No distributors configured.\n");
        return out;
    }

    for block in &report.blocks {
        out.push_str(&format!(
            "## {} ({} of {} permitted)\n\n",
            block.name,
            block.permitted,
            block.decisions.len()
        ));

        if block.decisions.is_empty() {
            out.push_str("No locations.\n\n");
            continue;
        }

        out.push_str("| City | Province | Country | Permitted |\n");
        out.push_str("|---|---|---|---|\n");
        for d in &block.decisions {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                escape_cell(&d.city),
                escape_cell(&d.province),
                escape_cell(&d.country),
                if d.permitted { "yes" } else { "no" }
            ));
        }
        out.push('\n');
    }

    out
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
