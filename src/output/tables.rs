use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color as TableColor, ContentArrangement, Table};

use crate::api::Branch;
use crate::routes;

/// Table and cell creation helpers
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn cyan_header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|label| Cell::new(*label).fg(TableColor::Cyan))
        .collect()
}

/// Switch-branch listing: name plus the route navigating to it.
pub fn branches_table(branches: &[&Branch], project_id: u64) -> Table {
    let mut table = create_table();
    table.set_header(cyan_header(&["Branch", "Route"]));

    for branch in branches {
        table.add_row(vec![
            Cell::new(&branch.name),
            Cell::new(routes::branch_files(project_id, &branch.name)),
        ]);
    }

    table
}

/// Repository actions and their routes.
pub fn actions_table(project_id: u64, branch: &str, path: &str) -> Table {
    let mut table = create_table();
    table.set_header(cyan_header(&["Action", "Route"]));

    table.add_row(vec![
        Cell::new("New branch"),
        Cell::new(routes::new_branch(project_id)),
    ]);
    table.add_row(vec![
        Cell::new("Data visualisation"),
        Cell::new(routes::empty_data_visualization(project_id)),
    ]);
    table.add_row(vec![
        Cell::new("Data pipeline"),
        Cell::new(routes::new_pipeline(project_id)),
    ]);
    table.add_row(vec![
        Cell::new("History"),
        Cell::new(routes::commit_history(project_id, branch, path)),
    ]);

    table
}
