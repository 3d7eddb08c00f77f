use console::style;

/// Advisory user notices, styled for the terminal and mirrored to the log
/// facade. Notices never abort the process.
pub fn info_notice(title: &str, message: &str) {
    log::info!("{title}: {message}");
    eprintln!("{} {}", style(format!("[{title}]")).cyan().bold(), message);
}

pub fn error_notice(title: &str, message: &str) {
    log::error!("{title}: {message}");
    eprintln!("{} {}", style(format!("[{title}]")).red().bold(), message);
}
