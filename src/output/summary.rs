use chrono::Utc;
use comfy_table::Cell;

use super::styling::{bright, dim, status_style};
use super::tables::create_table;
use crate::api::{Job, PipelineKind};
use crate::joblog::{format_duration, time_created_ago, JobLogState, OutputLink};

/// Prints the job overview: trigger header, status, and a details table
/// (duration, class, output link, runner, owning pipeline).
pub fn print_job_summary(job: &Job, state: &JobLogState, link: &OutputLink) {
    let ago = time_created_ago(job.created_at, Utc::now());
    println!(
        "{} triggered {} ago by {} {}",
        bright(format!("Job #{}", job.id)),
        ago,
        bright(&job.user.name),
        dim(&job.user.avatar_url),
    );
    println!(
        "Status: {}",
        status_style(job.status).apply_to(job.status.as_str())
    );

    // The by-id fetch is authoritative; the listing payload is the fallback.
    let duration = state.duration().or(job.duration);
    let parsed_duration = duration
        .map(|secs| format_duration(secs as i64))
        .unwrap_or_else(|| "unknown".to_string());
    let class = link.class.map(PipelineKind::label).unwrap_or("Unknown");
    let output = match &link.name {
        Some(name) => format!("{name} ({})", link.route),
        None => link.route.clone(),
    };

    let mut table = create_table();
    table.add_row(vec![Cell::new("Duration"), Cell::new(parsed_duration)]);
    table.add_row(vec![Cell::new("Class"), Cell::new(class)]);
    table.add_row(vec![Cell::new("Output"), Cell::new(output)]);
    if let Some(runner) = &job.runner {
        table.add_row(vec![
            Cell::new("Runner"),
            Cell::new(format!("{} (#{})", runner.description, runner.id)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Pipeline"),
        Cell::new(format!("#{}", job.pipeline.id)),
    ]);

    println!("{table}");
}
