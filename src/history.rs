//! Release history: the release notes introduced by each tagged version.

use crate::domain::{CommitNote, SemanticVersion};
use crate::error::Result;
use crate::git::Repository;

/// The notes of one release: commits in `(previous, version]` that carry a footer
#[derive(Debug, Clone, PartialEq)]
pub struct VersionHistoryEntry {
    pub version: SemanticVersion,
    pub previous: SemanticVersion,
    pub notes: Vec<CommitNote>,
}

/// Walks adjacent pairs of ordered versions and collects their release notes
///
/// The oldest version only serves as a boundary and never gets an entry of its own.
/// Commits keep the order the repository returns them in.
pub struct ReleaseHistoryBuilder<'r, R: Repository + ?Sized> {
    repo: &'r R,
}

impl<'r, R: Repository + ?Sized> ReleaseHistoryBuilder<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        ReleaseHistoryBuilder { repo }
    }

    /// Build one entry per version after the first.
    ///
    /// Fails on the first tag that cannot be resolved; nothing is retried.
    pub fn build(&self, ordered_versions: &[SemanticVersion]) -> Result<Vec<VersionHistoryEntry>> {
        ordered_versions
            .windows(2)
            .map(|pair| self.build_entry(&pair[0], &pair[1]))
            .collect()
    }

    /// Collect the notes introduced between `previous` (exclusive) and `current` (inclusive)
    pub fn build_entry(
        &self,
        previous: &SemanticVersion,
        current: &SemanticVersion,
    ) -> Result<VersionHistoryEntry> {
        let from = self.repo.resolve_tag(&previous.tag)?;
        let to = self.repo.resolve_tag(&current.tag)?;

        let commits = self.repo.commits_between(from, to)?;
        let total = commits.len();

        let notes: Vec<CommitNote> = commits
            .into_iter()
            .filter_map(CommitNote::from_commit)
            .collect();

        tracing::info!(
            from = %previous.tag,
            to = %current.tag,
            commits = total,
            notes = notes.len(),
            "collected release notes"
        );

        Ok(VersionHistoryEntry {
            version: current.clone(),
            previous: previous.clone(),
            notes,
        })
    }
}
