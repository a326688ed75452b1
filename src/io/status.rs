//! Human-readable status lines for each lifecycle transition

use crate::io::configuration::{Config, DOTS_PER_CELL};

/// Status shown while no run is active
pub const IDLE_STATUS: &str = "Status: Idle.";

/// Cell and dot totals, e.g. `Cells: 24 x 4 = 96. Dots: 96 x 8 = 768.`
pub fn format_counts(columns: usize, rows: usize) -> String {
    let cells = columns as u64 * rows as u64;
    let dots = cells * DOTS_PER_CELL as u64;
    format!("Cells: {columns} x {rows} = {cells}. Dots: {cells} x {DOTS_PER_CELL} = {dots}.")
}

/// Blink style summary
pub const fn blink_style(whole_line: bool) -> &'static str {
    if whole_line {
        "Blink whole line: ON."
    } else {
        "Blink whole line: OFF (walking)."
    }
}

/// Status for a running session
pub fn running_status(config: &Config) -> String {
    format!(
        "Status: Running. {}. {} Interval: {} ms. {}",
        config.mode().label(),
        format_counts(config.columns(), config.rows()),
        config.interval().as_millis(),
        blink_style(config.whole_line()),
    )
}

/// Status for a paused session
pub fn paused_status(config: &Config) -> String {
    format!(
        "Status: Paused. {}. {}",
        config.mode().label(),
        format_counts(config.columns(), config.rows()),
    )
}
