use std::cmp::Ordering;
use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{ReleaseNotesError, Result};

/// Semantic version discovered from a tag name
///
/// Equality and ordering only look at `(major, minor, patch, pre_release)`;
/// the tag name is carried along so the version can be resolved back to a commit.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: String,
    pub tag: String,
}

impl SemanticVersion {
    /// Create a new version for the given tag name
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre_release: pre_release.into(),
            tag: tag.into(),
        }
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    fn key(&self) -> (u64, u64, u64, &str) {
        (self.major, self.minor, self.patch, self.pre_release.as_str())
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Plain string comparison on the pre-release label, so `rc.10` sorts before `rc.2`.
impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_pre_release() {
            write!(f, "-{}", self.pre_release)?;
        }
        Ok(())
    }
}

/// Extracts semantic versions from tag names carrying a configured prefix
///
/// Accepts `<prefix><major>.<minor>.<patch>[-<pre_release>]`, case-insensitively.
/// The pre-release label is kept as one opaque string.
#[derive(Debug, Clone)]
pub struct VersionTagParser {
    prefix: String,
    pattern: Regex,
}

impl VersionTagParser {
    pub fn new(prefix: &str) -> Result<Self> {
        let source = format!(
            r"^{}(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)-?(?P<pre>[\w.+-]*)$",
            regex::escape(prefix)
        );

        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                ReleaseNotesError::config(format!("Invalid version prefix '{}': {}", prefix, e))
            })?;

        Ok(VersionTagParser {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    /// Parse a tag name, returning `None` for tags that are not release tags
    pub fn parse(&self, tag: &str) -> Option<SemanticVersion> {
        let captures = self.pattern.captures(tag)?;

        // Components too large for u64 are treated like any other non-release tag
        let major = captures.name("major")?.as_str().parse::<u64>().ok()?;
        let minor = captures.name("minor")?.as_str().parse::<u64>().ok()?;
        let patch = captures.name("patch")?.as_str().parse::<u64>().ok()?;
        let pre_release = captures
            .name("pre")
            .map(|m| m.as_str())
            .unwrap_or_default();

        Some(SemanticVersion::new(major, minor, patch, pre_release, tag))
    }

    /// Parse every tag, silently dropping the ones that do not match
    pub fn parse_all<'a, I>(&self, tags: I) -> Vec<SemanticVersion>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter()
            .filter_map(|tag| {
                let parsed = self.parse(tag);
                if parsed.is_none() {
                    tracing::debug!(tag, prefix = %self.prefix, "skipping non-release tag");
                }
                parsed
            })
            .collect()
    }
}

/// How pre-release labels are compared when ordering versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionOrdering {
    /// Whole-string comparison of the pre-release label
    #[default]
    Lexical,
    /// SemVer 2.0 precedence: releases after their pre-releases, numeric identifiers compared numerically
    Semver,
}

/// Sort versions ascending. The sort is stable for equal keys and never filters.
pub fn order_versions(
    versions: impl IntoIterator<Item = SemanticVersion>,
    ordering: VersionOrdering,
) -> Vec<SemanticVersion> {
    let mut ordered: Vec<SemanticVersion> = versions.into_iter().collect();

    match ordering {
        VersionOrdering::Lexical => ordered.sort(),
        VersionOrdering::Semver => ordered.sort_by_cached_key(SemverKey::from_version),
    }

    ordered
}

/// Total sort key for SemVer precedence.
///
/// Labels that are not valid SemVer pre-releases sort before valid ones and
/// fall back to string comparison among themselves.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SemverKey {
    core: (u64, u64, u64),
    is_release: bool,
    pre: Option<semver::Prerelease>,
    raw: String,
}

impl SemverKey {
    fn from_version(version: &SemanticVersion) -> Self {
        // Build metadata never takes part in precedence
        let label = version
            .pre_release
            .split('+')
            .next()
            .unwrap_or_default();

        SemverKey {
            core: (version.major, version.minor, version.patch),
            is_release: label.is_empty(),
            pre: semver::Prerelease::new(label).ok(),
            raw: version.pre_release.clone(),
        }
    }
}
