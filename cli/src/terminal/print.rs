use colored::*;
use crtgen_common::log::PRINT_TARGET;
use tracing::info;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Prints `msg` as is, through the logging pipeline.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn summary(hosts: usize, groups: usize, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let hosts: ColoredString = format!("{hosts} hosts").bold().green();
    let groups: ColoredString = format!("{groups} groups").bold().yellow();
    fat_separator();
    print(&format!("{} {hosts} in {groups}", "Total:".color(colors::TEXT_DEFAULT)));
}

pub fn no_results() {
    print(&format!("{}", "No hosts or groups defined".red().bold()));
}
