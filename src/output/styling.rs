use console::{style, Style};

use crate::api::JobStatus;

/// Styling helpers for terminal output
pub fn bright_yellow(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).bright().yellow()
}

pub fn bright_red(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).bright().red()
}

pub fn bright_green(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).bright().green()
}

pub fn dim(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).dim()
}

pub fn bright(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).bright()
}

pub fn magenta_bold(text: impl std::fmt::Display) -> console::StyledObject<String> {
    style(text.to_string()).magenta().bold()
}

/// Brand colors for job statuses, as served by the web frontend. The
/// terminal styles below approximate them.
pub const STATUS_SUCCESS_HEX: &str = "#38b797";
pub const STATUS_RUNNING_HEX: &str = "#2DB391";
pub const STATUS_PENDING_HEX: &str = "#E99444";
pub const STATUS_FALLBACK_HEX: &str = "red";

/// Hex color for a job status. Success and running map to the two teal
/// tones, pending to orange, anything else to red.
pub fn status_hex(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Success => STATUS_SUCCESS_HEX,
        JobStatus::Running => STATUS_RUNNING_HEX,
        JobStatus::Pending => STATUS_PENDING_HEX,
        _ => STATUS_FALLBACK_HEX,
    }
}

/// Terminal style approximating the status color.
pub fn status_style(status: JobStatus) -> Style {
    match status_hex(status) {
        STATUS_SUCCESS_HEX => Style::new().cyan().bold(),
        STATUS_RUNNING_HEX => Style::new().green().bold(),
        // 208 is the closest xterm tone to the orange above
        STATUS_PENDING_HEX => Style::new().color256(208).bold(),
        _ => Style::new().red().bold(),
    }
}
