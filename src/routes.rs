use crate::api::{PipelineKind, PipelineSummary};

/// Route to the page of a job's output, selected by the matched pipeline's
/// kind. With no matched pipeline the link falls back to the experiments
/// collection.
pub fn output_target(namespace: &str, slug: &str, pipeline: Option<&PipelineSummary>) -> String {
    match pipeline {
        Some(pipeline) => {
            let section = match pipeline.kind {
                PipelineKind::Data => "datasets",
                PipelineKind::Visualization => "visualizations",
                _ => "experiments",
            };
            format!("/{namespace}/{slug}/-/{section}/{}", pipeline.id)
        }
        None => format!("/{namespace}/{slug}/-/experiments"),
    }
}

/// Route to the file tree of a branch.
pub fn branch_files(project_id: u64, branch: &str) -> String {
    format!("/my-projects/{project_id}/{}", urlencoding::encode(branch))
}

pub fn new_branch(project_id: u64) -> String {
    format!("/my-projects/{project_id}/new-branch")
}

pub fn empty_data_visualization(project_id: u64) -> String {
    format!("/my-projects/{project_id}/empty-data-visualization")
}

pub fn new_pipeline(project_id: u64) -> String {
    format!("/my-projects/{project_id}/pipe-line")
}

/// Route to the commit history of a branch at a directory.
pub fn commit_history(project_id: u64, branch: &str, path: &str) -> String {
    format!("/my-projects/{project_id}/{branch}/commits/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64, kind: &str) -> PipelineSummary {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": "gentle-badger-1",
            "pipeline_type": kind,
        }))
        .unwrap()
    }

    #[test]
    fn test_output_target_by_kind() {
        let data = summary(3, "DATA");
        let vis = summary(4, "VISUALIZATION");
        let exp = summary(5, "EXPERIMENT");

        assert_eq!(
            output_target("ns", "proj", Some(&data)),
            "/ns/proj/-/datasets/3"
        );
        assert_eq!(
            output_target("ns", "proj", Some(&vis)),
            "/ns/proj/-/visualizations/4"
        );
        assert_eq!(
            output_target("ns", "proj", Some(&exp)),
            "/ns/proj/-/experiments/5"
        );
    }

    #[test]
    fn test_output_target_without_match() {
        assert_eq!(output_target("ns", "proj", None), "/ns/proj/-/experiments");
    }

    #[test]
    fn test_branch_files_encodes_branch_names() {
        assert_eq!(
            branch_files(12, "feature/tuning"),
            "/my-projects/12/feature%2Ftuning"
        );
    }

    #[test]
    fn test_action_routes() {
        assert_eq!(new_branch(12), "/my-projects/12/new-branch");
        assert_eq!(
            empty_data_visualization(12),
            "/my-projects/12/empty-data-visualization"
        );
        assert_eq!(new_pipeline(12), "/my-projects/12/pipe-line");
        assert_eq!(
            commit_history(12, "master", "src"),
            "/my-projects/12/master/commits/src"
        );
    }
}
