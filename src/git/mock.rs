use crate::error::{ReleaseNotesError, Result};
use crate::git::{CommitInfo, Repository};
use git2::Oid;
use std::collections::HashMap;

/// Mock repository with a single linear history, for testing without git
///
/// Commits are appended oldest first; tags point at existing commits.
pub struct MockRepository {
    commits: Vec<(Oid, CommitInfo)>,
    tags: HashMap<String, Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
        }
    }

    /// Append a commit on top of the history and return its OID
    pub fn add_commit(&mut self, message: impl Into<String>) -> Result<Oid> {
        let mut bytes = [0u8; 20];
        let sequence = (self.commits.len() as u64 + 1).to_be_bytes();
        bytes[12..].copy_from_slice(&sequence);
        let oid = Oid::from_bytes(&bytes)?;

        let info = CommitInfo::new(oid.to_string(), message, "Mock Author");
        self.commits.push((oid, info));

        Ok(oid)
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    /// Tag the most recent commit
    pub fn tag_head(&mut self, name: impl Into<String>) -> Option<Oid> {
        let oid = self.commits.last().map(|(oid, _)| *oid)?;
        self.add_tag(name, oid);
        Some(oid)
    }

    fn position(&self, oid: Oid) -> Result<usize> {
        self.commits
            .iter()
            .position(|(candidate, _)| *candidate == oid)
            .ok_or_else(|| {
                ReleaseNotesError::Git(git2::Error::from_str(&format!(
                    "commit {} not found",
                    oid
                )))
            })
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.keys().cloned().collect())
    }

    fn resolve_tag(&self, tag_name: &str) -> Result<Oid> {
        self.tags
            .get(tag_name)
            .copied()
            .ok_or_else(|| ReleaseNotesError::tag_not_found(tag_name))
    }

    fn commits_between(&self, from_oid: Oid, to_oid: Oid) -> Result<Vec<CommitInfo>> {
        let from = self.position(from_oid)?;
        let to = self.position(to_oid)?;

        if to <= from {
            return Ok(Vec::new());
        }

        Ok(self.commits[from + 1..=to]
            .iter()
            .rev()
            .map(|(_, info)| info.clone())
            .collect())
    }
}
