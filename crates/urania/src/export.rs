//! JSON and text renderings of a chart snapshot.

use crate::analysis::generate_analysis;
use crate::chart::ChartSnapshot;
use crate::error::ChartError;

pub fn snapshot_to_json(snapshot: &ChartSnapshot, pretty: bool) -> Result<String, ChartError> {
    let json = if pretty {
        serde_json::to_string_pretty(snapshot)?
    } else {
        serde_json::to_string(snapshot)?
    };
    Ok(json)
}

pub fn snapshot_from_json(json: &str) -> Result<ChartSnapshot, ChartError> {
    Ok(serde_json::from_str(json)?)
}

/// Markdown-style analysis document.
pub fn analysis_to_text(snapshot: &ChartSnapshot) -> String {
    let analysis = generate_analysis(snapshot);

    let mut text = String::from("# NATAL CHART ANALYSIS\n\n");
    text.push_str(&format!("## Summary\n{}\n\n", analysis.summary));
    text.push_str(&format!("## Planetary Positions\n{}\n\n", analysis.planets));
    text.push_str(&format!("## House Placements\n{}\n\n", analysis.houses));
    text.push_str(&format!("## Aspects\n{}\n\n", analysis.aspects));
    text.push_str(&format!("## Elemental Balance\n{}\n\n", analysis.elements));
    if let Some(transits) = &analysis.transits {
        text.push_str(&format!("## Transit Analysis\n{}\n\n", transits));
    }
    text
}
