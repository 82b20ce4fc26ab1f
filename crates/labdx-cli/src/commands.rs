use eyre::WrapErr;
use labdx_core::models::{Direction, LabPanel};
use labdx_engine::Analyzer;
use labdx_engine::render;

use crate::config::OutputFormat;
use crate::tables::Tables;

/// Analyze a JSON object of lab values and format the report.
pub fn analyze(
    input: &str,
    tables: &Tables,
    format: OutputFormat,
    pretty: bool,
) -> eyre::Result<String> {
    let panel = LabPanel::from_json(input).wrap_err("lab values must be a JSON object")?;
    let report = Analyzer::new(&tables.reference, &tables.patterns).analyze(&panel);

    let mut output = match format {
        OutputFormat::Text => render::to_text(&report),
        OutputFormat::Json if pretty => report.to_json_pretty()?,
        OutputFormat::Json => report.to_json()?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Reference ranges grouped by category, optionally filtered to one, with
/// the condition each direction of deviation points to.
pub fn ranges(tables: &Tables, category: Option<&str>) -> String {
    let mut output = String::new();
    for name in tables.reference.categories() {
        if category.is_some_and(|c| !c.eq_ignore_ascii_case(name)) {
            continue;
        }
        output.push_str(&format!("### {name}\n"));
        for range in tables.reference.in_category(name) {
            output.push_str(&format!(
                "- {} ({}): {} {}",
                range.name,
                range.key,
                range.normal_range(),
                range.unit
            ));
            let conditions: Vec<String> = [Direction::Low, Direction::High]
                .into_iter()
                .filter_map(|d| range.condition_for(d).map(|c| format!("{}: {c}", d.as_str())))
                .collect();
            if !conditions.is_empty() {
                output.push_str(&format!("; {}", conditions.join(", ")));
            }
            output.push('\n');
        }
        output.push('\n');
    }
    output
}
