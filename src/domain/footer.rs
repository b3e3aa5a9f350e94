//! Release-note footers embedded in commit messages.
//!
//! A commit carries release notes when its message looks like
//!
//! ```text
//! Fix crash on empty config
//!
//! Fixed: no longer panics when the config file is empty
//! Type: bugfix
//! ```
//!
//! Detection and extraction are separate grammars: [`has_footer_block`] decides
//! whether a message has the footer shape at all, [`extract_fields`] collects
//! every `key: value` pair after the subject line.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::commit::CommitInfo;

/// A blank line followed by one or more `key: value` lines
static FOOTER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^.*\r?\n\r?\n(?:\w+[ \t]*:[ \t]*\S.*(?:\n|$))+").expect("valid footer regex")
});

/// A single `key: value` pair; the value runs to the end of its line
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<key>\w+)[ \t]*:[ \t]*(?P<value>\S.*)").expect("valid key/value regex")
});

/// One `key: value` entry from a footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteField {
    pub key: String,
    pub value: String,
}

impl NoteField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        NoteField {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Whether the message has a subject, a blank line, then `key: value` lines
pub fn has_footer_block(message: &str) -> bool {
    FOOTER_BLOCK.is_match(message)
}

/// Every `key: value` pair after the subject line, in message order.
///
/// Duplicate keys are all kept. Values may contain colons.
pub fn extract_fields(message: &str) -> Vec<NoteField> {
    let Some((_, body)) = message.split_once('\n') else {
        return Vec::new();
    };

    KEY_VALUE
        .captures_iter(body)
        .filter_map(|captures| {
            let key = captures.name("key")?.as_str().trim();
            let value = captures.name("value")?.as_str().trim();
            Some(NoteField::new(key, value))
        })
        .collect()
}

/// A commit together with the release-note fields found in its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitNote {
    pub commit: CommitInfo,
    pub fields: Vec<NoteField>,
}

impl CommitNote {
    /// Extract the note of a commit.
    ///
    /// Returns `None` when the message has no footer block or the footer yields
    /// no fields; such commits do not contribute to the release notes.
    pub fn from_commit(commit: CommitInfo) -> Option<Self> {
        if !has_footer_block(&commit.message) {
            tracing::debug!(commit = commit.short_hash(), "no release-note footer");
            return None;
        }

        let fields = extract_fields(&commit.message);
        if fields.is_empty() {
            tracing::debug!(commit = commit.short_hash(), "footer without fields");
            return None;
        }

        Some(CommitNote { commit, fields })
    }

    /// Fields merged into a map in message order.
    ///
    /// A later duplicate overrides the value but keeps the key's first position.
    pub fn field_map(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.key.clone(), field.value.clone()))
            .collect()
    }
}
