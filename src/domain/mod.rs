//! Domain logic - pure release-note rules independent of git operations

pub mod commit;
pub mod footer;
pub mod version;

pub use commit::CommitInfo;
pub use footer::{extract_fields, has_footer_block, CommitNote, NoteField};
pub use version::{order_versions, SemanticVersion, VersionOrdering, VersionTagParser};
