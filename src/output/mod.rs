mod progress;
mod styling;
mod summary;
mod tables;
mod transcript;

pub use progress::FetchSpinner;
pub use summary::print_job_summary;
pub use tables::{actions_table, branches_table};
pub use transcript::print_transcript;

use styling::{dim, magenta_bold};

/// Prints the `mlboard` banner to stderr.
///
/// Displays the tool name, version, and description at the start of
/// execution.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        magenta_bold("📊 mlboard"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("ML Pipeline Dashboard")
    );
}
