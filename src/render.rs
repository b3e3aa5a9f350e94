//! Render-ready release data and the Handlebars renderer that consumes it.
//!
//! Templates see the following shape:
//!
//! ```text
//! versions[]
//!   version   { tag, major, minor, patch, pre_release, display }
//!   previous  { tag, major, minor, patch, pre_release, display }
//!   notes[]
//!     commit  { hash, short_hash, summary, author, message }
//!     data    { <footer key>: <value>, ... }
//! ```

use handlebars::Handlebars;
use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::{CommitNote, SemanticVersion};
use crate::error::{ReleaseNotesError, Result};
use crate::history::VersionHistoryEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub tag: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: String,
    pub display: String,
}

impl From<&SemanticVersion> for VersionInfo {
    fn from(version: &SemanticVersion) -> Self {
        VersionInfo {
            tag: version.tag.clone(),
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre_release: version.pre_release.clone(),
            display: version.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitView {
    pub hash: String,
    pub short_hash: String,
    pub summary: String,
    pub author: String,
    pub message: String,
}

/// One commit's release note; footer keys stay in message order, duplicates keep their last value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView {
    pub commit: CommitView,
    pub data: IndexMap<String, String>,
}

impl From<&CommitNote> for NoteView {
    fn from(note: &CommitNote) -> Self {
        let commit = &note.commit;
        NoteView {
            commit: CommitView {
                hash: commit.hash.clone(),
                short_hash: commit.short_hash().to_string(),
                summary: commit.summary().to_string(),
                author: commit.author.clone(),
                message: commit.message.clone(),
            },
            data: note.field_map(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionView {
    pub version: VersionInfo,
    pub previous: VersionInfo,
    pub notes: Vec<NoteView>,
}

/// Everything a template can reference, versions in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderData {
    pub versions: Vec<VersionView>,
}

impl RenderData {
    /// Flatten built history into render data without reordering anything
    pub fn assemble(history: &[VersionHistoryEntry]) -> Self {
        let versions = history
            .iter()
            .map(|entry| VersionView {
                version: VersionInfo::from(&entry.version),
                previous: VersionInfo::from(&entry.previous),
                notes: entry.notes.iter().map(NoteView::from).collect(),
            })
            .collect();

        RenderData { versions }
    }

    pub fn note_count(&self) -> usize {
        self.versions.iter().map(|v| v.notes.len()).sum()
    }
}

/// Renders release data through a Handlebars template
///
/// Output is not HTML-escaped. In strict mode a reference to an undefined field
/// fails the render instead of producing an empty string.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new(strict: bool) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(strict);
        registry.register_escape_fn(handlebars::no_escape);

        TemplateRenderer { registry }
    }

    pub fn render(&self, template_source: &str, data: &RenderData) -> Result<String> {
        self.registry
            .render_template(template_source, data)
            .map_err(|e| ReleaseNotesError::template(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CommitInfo;

    fn note(hash: &str, message: &str) -> CommitNote {
        CommitNote::from_commit(CommitInfo::new(hash, message, "Tester")).unwrap()
    }

    fn history() -> Vec<VersionHistoryEntry> {
        vec![
            VersionHistoryEntry {
                version: SemanticVersion::new(1, 1, 0, "", "v1.1.0"),
                previous: SemanticVersion::new(1, 0, 0, "", "v1.0.0"),
                notes: vec![note("aaaaaaaaaa", "Add login\n\nAdded: login page\nAdded: <b>logout</b>")],
            },
            VersionHistoryEntry {
                version: SemanticVersion::new(2, 0, 0, "rc.1", "v2.0.0-rc.1"),
                previous: SemanticVersion::new(1, 1, 0, "", "v1.1.0"),
                notes: vec![
                    note("bbbbbbbbbb", "Remove API\n\nRemoved: old API"),
                    note("cccccccccc", "Fix crash\n\nFixed: crash"),
                ],
            },
        ]
    }

    #[test]
    fn test_assemble_preserves_order() {
        let data = RenderData::assemble(&history());

        let tags: Vec<&str> = data.versions.iter().map(|v| v.version.tag.as_str()).collect();
        assert_eq!(tags, vec!["v1.1.0", "v2.0.0-rc.1"]);
        assert_eq!(data.versions[1].version.display, "2.0.0-rc.1");
        assert_eq!(data.versions[1].previous.tag, "v1.1.0");

        let summaries: Vec<&str> = data.versions[1]
            .notes
            .iter()
            .map(|n| n.commit.summary.as_str())
            .collect();
        assert_eq!(summaries, vec!["Remove API", "Fix crash"]);
        assert_eq!(data.note_count(), 3);
    }

    #[test]
    fn test_assemble_merges_duplicate_keys() {
        let data = RenderData::assemble(&history());
        let first = &data.versions[0].notes[0];
        assert_eq!(first.data.len(), 1);
        assert_eq!(first.data["Added"], "<b>logout</b>");
        assert_eq!(first.commit.short_hash, "aaaaaaa");
    }

    #[test]
    fn test_render_template() {
        let data = RenderData::assemble(&history());
        let template = "{{#each versions}}## {{version.display}}\n{{#each notes}}- {{commit.summary}} ({{commit.short_hash}})\n{{/each}}{{/each}}";

        let output = TemplateRenderer::default().render(template, &data).unwrap();
        assert_eq!(
            output,
            "## 1.1.0\n- Add login (aaaaaaa)\n## 2.0.0-rc.1\n- Remove API (bbbbbbb)\n- Fix crash (ccccccc)\n"
        );
    }

    #[test]
    fn test_render_does_not_escape() {
        let data = RenderData::assemble(&history());
        let template = "{{#each versions}}{{#each notes}}{{data.Added}}{{/each}}{{/each}}";

        let output = TemplateRenderer::new(false).render(template, &data).unwrap();
        assert_eq!(output, "<b>logout</b>");
    }

    #[test]
    fn test_render_strict_missing_field_fails() {
        let data = RenderData::assemble(&history());
        let err = TemplateRenderer::new(true)
            .render("{{title}}", &data)
            .unwrap_err();
        assert!(matches!(err, ReleaseNotesError::Template(_)));
    }

    #[test]
    fn test_render_lenient_missing_field_is_empty() {
        let data = RenderData::assemble(&history());
        let output = TemplateRenderer::new(false)
            .render("[{{title}}]", &data)
            .unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_render_malformed_template_fails() {
        let data = RenderData::default();
        let err = TemplateRenderer::default()
            .render("{{#each versions}}", &data)
            .unwrap_err();
        assert!(matches!(err, ReleaseNotesError::Template(_)));
    }

    #[test]
    fn test_render_data_keys_in_message_order() {
        let history = vec![VersionHistoryEntry {
            version: SemanticVersion::new(1, 1, 0, "", "v1.1.0"),
            previous: SemanticVersion::new(1, 0, 0, "", "v1.0.0"),
            notes: vec![note("dddddddddd", "Fix\n\nType: bugfix\nAdded: thing\nScope: core")],
        }];
        let data = RenderData::assemble(&history);
        let template = "{{#each versions}}{{#each notes}}{{#each data}}{{@key}};{{/each}}{{/each}}{{/each}}";

        let output = TemplateRenderer::default().render(template, &data).unwrap();
        assert_eq!(output, "Type;Added;Scope;");
    }
}
