use dnscheck_common::models::Report;

pub fn render(report: &Report) -> serde_json::Result<String> {
    let mut json: String = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
