use std::fmt::{self, Write};
use std::time::Duration;

use dnscheck_common::models::{Category, ProbeResult, Report, Summary};

const TITLE: &str = "DNS Check Results";
const RULE: &str = "=================";

pub fn render(report: &Report) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{TITLE}")?;
    writeln!(out, "{RULE}")?;
    let timestamp = report.timestamp().format("%Y-%m-%d %H:%M:%S");
    writeln!(out, "Timestamp: {timestamp}\n")?;

    write_summary(&mut out, report.summary())?;

    writeln!(out, "Detailed Results:")?;
    writeln!(out, "-----------------")?;
    for server_results in group_by_server(report.results()) {
        write_server(&mut out, &server_results)?;
    }

    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    write_summary(&mut out, report.summary())?;

    Ok(out)
}

fn write_summary(out: &mut String, summary: &Summary) -> fmt::Result {
    writeln!(out, "Summary:")?;
    writeln!(out, "  Total Tests: {}", summary.total)?;
    writeln!(out, "  Successful: {}", summary.successful)?;
    writeln!(out, "  Failed: {}", summary.failed)?;
    writeln!(
        out,
        "  Overall Success Rate: {}",
        summary.success_rate.map(percent).unwrap_or_else(|| "n/a".into())
    )?;
    writeln!(
        out,
        "  Average Response Time: {}",
        summary.average_latency.map(millis).unwrap_or_else(|| "n/a".into())
    )?;

    writeln!(out, "\n  Category Success Rates:")?;
    for (category, stats) in &summary.categories {
        writeln!(
            out,
            "    {:<12}: {} ({}/{})",
            category.as_str(),
            percent(stats.success_rate),
            stats.successful,
            stats.total
        )?;
    }
    writeln!(out)
}

/// Groups results per server (address and label) in order of first appearance.
///
/// Two list entries may share an address under different labels, so equal
/// servers are not necessarily adjacent.
fn group_by_server(results: &[ProbeResult]) -> Vec<Vec<&ProbeResult>> {
    let mut groups: Vec<Vec<&ProbeResult>> = Vec::new();
    for result in results {
        let existing = groups.iter_mut().find(|g| g[0].server == result.server);
        match existing {
            Some(group) => group.push(result),
            None => groups.push(vec![result]),
        }
    }
    groups
}

/// `results` all belong to the same server.
fn write_server(out: &mut String, results: &[&ProbeResult]) -> fmt::Result {
    let Some(first) = results.first() else {
        return Ok(());
    };
    writeln!(out, "\nDNS Server: {}", first.server)?;

    for category in Category::ALL {
        let in_category: Vec<&ProbeResult> = results
            .iter()
            .copied()
            .filter(|r| r.category == category)
            .collect();
        if in_category.is_empty() {
            continue;
        }

        writeln!(out, "  {category}:")?;
        for result in &in_category {
            write_result(out, result)?;
        }
        let successful: usize = in_category.iter().filter(|r| r.success).count();
        writeln!(
            out,
            "    {category} Success Rate: {}\n",
            ratio(successful, in_category.len())
        )?;
    }

    let successful: usize = results.iter().filter(|r| r.success).count();
    let overall: String = ratio(successful, results.len());
    writeln!(out, "  Overall Success Rate: {overall}")
}

fn write_result(out: &mut String, result: &ProbeResult) -> fmt::Result {
    let (status, details): (&str, String) = match (&result.resolved, &result.error) {
        (Some(addr), _) if result.success => ("OK", addr.to_string()),
        (_, Some(error)) => ("FAIL", error.clone()),
        _ => ("FAIL", String::new()),
    };
    writeln!(
        out,
        "    {:<22} [{:>4}] {:>8} {}",
        result.domain,
        status,
        format!("{}ms", result.latency.as_millis()),
        details
    )
}

/// Only called with non-empty groups.
fn ratio(successful: usize, total: usize) -> String {
    let rate: f64 = successful as f64 / total as f64 * 100.0;
    format!("{} ({successful}/{total})", percent(rate))
}

fn percent(rate: f64) -> String {
    format!("{rate:.2}%")
}

fn millis(d: Duration) -> String {
    format!("{:.2}ms", d.as_secs_f64() * 1_000.0)
}
