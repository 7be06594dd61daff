use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

/// Writes `msg` to the log stream without a level prefix.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ DNSCHECK v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .color(colors::SEPARATOR);
    print(&format!("{sep}{text}{sep}"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&header_line(msg));
}

fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    )
}

pub fn fat_separator(q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}
