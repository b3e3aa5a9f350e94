//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the repository queries
//! git-relnotes needs, allowing for a real implementation backed by libgit2 and
//! an in-memory one for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory linear history for testing
//!
//! # Usage
//!
//! History building depends on the [Repository] trait rather than concrete
//! implementations, so the whole pipeline can run against a mock.
//!
//! ```rust
//! # use git_relnotes::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_relnotes::Result<()> {
//! let from = repo.resolve_tag("v1.0.0")?;
//! let to = repo.resolve_tag("v1.1.0")?;
//! let commits = repo.commits_between(from, to)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

pub use crate::domain::CommitInfo;
use crate::error::Result;
use git2::Oid;

/// Repository queries used to build release history
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map underlying
/// errors (like `git2::Error`) to [crate::error::ReleaseNotesError] variants; a
/// tag that does not exist is always [crate::error::ReleaseNotesError::TagNotFound].
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation with a linear history
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// Returns short tag names (without the `refs/tags/` prefix) in no
    /// particular order.
    ///
    /// # Example
    /// ```rust
    /// # use git_relnotes::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> git_relnotes::Result<()> {
    /// for tag in repo.list_tags()? {
    ///     println!("Tag: {}", tag);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Resolve a tag name to the commit it points at
    ///
    /// Handles both lightweight and annotated tags.
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the tagged commit
    /// * `Err(TagNotFound)` - If the tag doesn't exist
    /// * `Err` - If there's a Git error
    fn resolve_tag(&self, tag_name: &str) -> Result<Oid>;

    /// Get the commits introduced between two commits
    ///
    /// Returns commits reachable from `to_oid` but not from `from_oid`:
    /// `from_oid` is excluded, `to_oid` is included. Newest commits come first.
    ///
    /// # Arguments
    /// * `from_oid` - Boundary commit (exclusive - it and its ancestors are not included)
    /// * `to_oid` - Ending commit (inclusive)
    fn commits_between(&self, from_oid: Oid, to_oid: Oid) -> Result<Vec<CommitInfo>>;
}
