use thiserror::Error;

use crate::api::Branch;

/// Prefixes of system-generated branches. These back pipeline and experiment
/// runs and are hidden from the user-facing switch-branch list.
pub const HIDDEN_BRANCH_PREFIXES: [&str; 3] =
    ["data-pipeline/", "data-visualization/", "experiment/"];

pub fn is_system_branch(name: &str) -> bool {
    HIDDEN_BRANCH_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Branches eligible for manual checkout, in input order.
pub fn switchable_branches(branches: &[Branch]) -> Vec<&Branch> {
    branches
        .iter()
        .filter(|branch| !is_system_branch(&branch.name))
        .collect()
}

/// Branch-switcher state for the repo features view.
///
/// Holds the latest branch list and the selected branch. The selection is
/// URL-decoded on construction; refreshes replace the list but only move the
/// selection when the incoming value actually differs, so redundant
/// refreshes are idempotent.
#[derive(Debug, Default)]
pub struct BranchSwitcher {
    branches: Vec<Branch>,
    branch_selected: String,
}

impl BranchSwitcher {
    pub fn new(branch: &str) -> Self {
        let branch_selected = urlencoding::decode(branch)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| branch.to_string());

        Self {
            branches: Vec::new(),
            branch_selected,
        }
    }

    pub fn refresh(&mut self, branches: Vec<Branch>, branch: &str) {
        self.branches = branches;
        if branch != self.branch_selected {
            self.branch_selected = branch.to_string();
        }
    }

    pub fn selected(&self) -> &str {
        &self.branch_selected
    }

    pub fn switchable(&self) -> Vec<&Branch> {
        switchable_branches(&self.branches)
    }
}

pub const DISALLOWED_NAME_CHARS: [char; 8] = [' ', '~', '^', ':', '?', '*', '[', '\\'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BranchDraftError {
    #[error("a source branch must be selected")]
    NoSource,
    #[error("branch name must not be empty")]
    EmptyName,
    #[error("branch name contains an illegal character: {0:?}")]
    IllegalCharacter(char),
    #[error("branch name may not start with '-' or contain '..'")]
    IllegalSequence,
    #[error("a branch with this name already exists")]
    AlreadyExists,
}

/// Transient state of the new-branch flow: a source branch and a proposed
/// name. Creation is only exposed once validation passes.
#[derive(Debug, Clone)]
pub struct BranchDraft {
    pub source: Option<String>,
    pub name: String,
}

impl BranchDraft {
    pub fn new(source: Option<String>, name: impl Into<String>) -> Self {
        Self {
            source,
            name: name.into(),
        }
    }

    pub fn validate(&self, existing: &[Branch]) -> Result<(), BranchDraftError> {
        if self.source.as_deref().unwrap_or("").is_empty() {
            return Err(BranchDraftError::NoSource);
        }

        if self.name.is_empty() {
            return Err(BranchDraftError::EmptyName);
        }

        if let Some(illegal) = self
            .name
            .chars()
            .find(|c| DISALLOWED_NAME_CHARS.contains(c) || c.is_control())
        {
            return Err(BranchDraftError::IllegalCharacter(illegal));
        }

        if self.name.starts_with('-') || self.name.contains("..") {
            return Err(BranchDraftError::IllegalSequence);
        }

        if existing.iter().any(|branch| branch.name == self.name) {
            return Err(BranchDraftError::AlreadyExists);
        }

        Ok(())
    }

    pub fn is_valid(&self, existing: &[Branch]) -> bool {
        self.validate(existing).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(name: &str) -> Branch {
        serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
    }

    #[test]
    fn test_system_branches_are_filtered_out() {
        let branches = vec![
            branch("master"),
            branch("data-pipeline/gentle-badger-1"),
            branch("data-visualization/plots-1"),
            branch("experiment/42/output-a"),
            branch("feature/tuning"),
        ];

        let visible = switchable_branches(&branches);
        let names: Vec<&str> = visible.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["master", "feature/tuning"]);
    }

    #[test]
    fn test_switcher_decodes_selection() {
        let switcher = BranchSwitcher::new("feature%2Ftuning");
        assert_eq!(switcher.selected(), "feature/tuning");
    }

    #[test]
    fn test_refresh_is_idempotent_for_same_branch() {
        let mut switcher = BranchSwitcher::new("master");
        switcher.refresh(vec![branch("master"), branch("develop")], "master");
        switcher.refresh(vec![branch("master"), branch("develop")], "master");

        assert_eq!(switcher.selected(), "master");
        assert_eq!(switcher.switchable().len(), 2);
    }

    #[test]
    fn test_refresh_tracks_genuine_navigation() {
        let mut switcher = BranchSwitcher::new("master");
        switcher.refresh(vec![branch("master"), branch("develop")], "develop");
        assert_eq!(switcher.selected(), "develop");
    }

    #[test]
    fn test_draft_requires_source_and_name() {
        let existing = [branch("master")];
        assert_eq!(
            BranchDraft::new(None, "ok").validate(&existing),
            Err(BranchDraftError::NoSource)
        );
        assert_eq!(
            BranchDraft::new(Some("master".into()), "").validate(&existing),
            Err(BranchDraftError::EmptyName)
        );
    }

    #[test]
    fn test_draft_rejects_illegal_characters() {
        let existing = [branch("master")];
        let draft = BranchDraft::new(Some("master".into()), "my branch");
        assert_eq!(
            draft.validate(&existing),
            Err(BranchDraftError::IllegalCharacter(' '))
        );

        let draft = BranchDraft::new(Some("master".into()), "release-..-next");
        assert_eq!(
            draft.validate(&existing),
            Err(BranchDraftError::IllegalSequence)
        );
    }

    #[test]
    fn test_draft_rejects_collisions() {
        let existing = [branch("master"), branch("feature/tuning")];
        let draft = BranchDraft::new(Some("master".into()), "feature/tuning");
        assert_eq!(
            draft.validate(&existing),
            Err(BranchDraftError::AlreadyExists)
        );
    }

    #[test]
    fn test_valid_draft_passes() {
        let existing = [branch("master")];
        let draft = BranchDraft::new(Some("master".into()), "feature/tuning");
        assert!(draft.is_valid(&existing));
    }
}
