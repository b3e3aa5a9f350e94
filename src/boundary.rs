use std::fmt;

/// Warnings about the edges of the release history.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag matched the version grammar
    NoVersionTags { prefix: String },
    /// Only one release tag exists, so there is no range to collect notes from
    SingleVersionTag { tag: String },
    /// `--from`/`--to` were given, but every release in the history is processed
    RangeOptionsIgnored { from: String, to: String },
    /// A release range contained no commits with release-note footers
    EmptyRelease { tag: String, previous: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoVersionTags { prefix } => {
                if prefix.is_empty() {
                    write!(f, "No version tags found")
                } else {
                    write!(f, "No version tags found with prefix '{}'", prefix)
                }
            }
            BoundaryWarning::SingleVersionTag { tag } => {
                write!(
                    f,
                    "Only one version tag found ('{}'); at least two are needed to collect release notes",
                    tag
                )
            }
            BoundaryWarning::RangeOptionsIgnored { from, to } => {
                let from = if from.is_empty() { "<start>" } else { from };
                write!(
                    f,
                    "Range '{}'..'{}' is informational only; the whole tag history is processed",
                    from, to
                )
            }
            BoundaryWarning::EmptyRelease { tag, previous } => {
                write!(
                    f,
                    "No release notes found between '{}' and '{}'",
                    previous, tag
                )
            }
        }
    }
}
