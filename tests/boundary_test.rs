mod common;

use git_relnotes::boundary::BoundaryWarning;
use git_relnotes::cli::orchestration::{
    generate_release_notes, history_warnings, PipelineSettings,
};
use git_relnotes::cli::CreateWorkflowArgs;
use git_relnotes::domain::SemanticVersion;
use git_relnotes::git::Git2Repository;
use git_relnotes::history::ReleaseHistoryBuilder;
use git_relnotes::{ui, ReleaseNotesError};

use common::{three_releases, ScratchRepo};

fn warnings_for(scratch: &ScratchRepo) -> Vec<BoundaryWarning> {
    let repo = Git2Repository::open(scratch.path()).unwrap();
    let settings = PipelineSettings {
        prefix: "v".to_string(),
        ..PipelineSettings::default()
    };
    let generated = generate_release_notes(&repo, &settings, "").unwrap();
    history_warnings(&CreateWorkflowArgs::default(), &settings, &generated)
}

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_no_version_tags_display() {
    let warning = BoundaryWarning::NoVersionTags {
        prefix: "v".to_string(),
    };
    assert_eq!(warning.to_string(), "No version tags found with prefix 'v'");

    let warning = BoundaryWarning::NoVersionTags {
        prefix: String::new(),
    };
    assert_eq!(warning.to_string(), "No version tags found");
}

#[test]
fn test_single_version_tag_display() {
    let warning = BoundaryWarning::SingleVersionTag {
        tag: "v1.0.0".to_string(),
    };
    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("v1.0.0"),
        "Message should contain tag 'v1.0.0', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("at least two"),
        "Message should explain why, got: {}",
        display_msg
    );
}

#[test]
fn test_range_options_ignored_display() {
    let warning = BoundaryWarning::RangeOptionsIgnored {
        from: String::new(),
        to: "main".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "Range '<start>'..'main' is informational only; the whole tag history is processed"
    );
}

#[test]
fn test_empty_release_display() {
    let warning = BoundaryWarning::EmptyRelease {
        tag: "v1.1.0".to_string(),
        previous: "v1.0.0".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "No release notes found between 'v1.0.0' and 'v1.1.0'"
    );
}

#[test]
fn test_display_boundary_warning_does_not_panic() {
    ui::display_boundary_warning(&BoundaryWarning::EmptyRelease {
        tag: "v1.1.0".to_string(),
        previous: "v1.0.0".to_string(),
    });
}

// ============================================================================
// History Edge Tests
// ============================================================================

#[test]
fn test_repository_without_release_tags() {
    let mut scratch = ScratchRepo::new();
    scratch.commit("Initial commit\n\nAdded: skeleton");
    scratch.tag("latest");

    assert_eq!(
        warnings_for(&scratch),
        vec![BoundaryWarning::NoVersionTags {
            prefix: "v".to_string()
        }]
    );
}

#[test]
fn test_repository_with_single_release_tag() {
    let mut scratch = ScratchRepo::new();
    scratch.commit("Initial commit\n\nAdded: skeleton");
    scratch.tag("v1.0.0");

    assert_eq!(
        warnings_for(&scratch),
        vec![BoundaryWarning::SingleVersionTag {
            tag: "v1.0.0".to_string()
        }]
    );
}

#[test]
fn test_release_without_footer_commits() {
    let mut scratch = ScratchRepo::new();
    scratch.commit("Initial commit");
    scratch.tag("v1.0.0");
    scratch.commit("Refactor\n\njust text");
    scratch.tag("v1.0.1");

    assert_eq!(
        warnings_for(&scratch),
        vec![BoundaryWarning::EmptyRelease {
            tag: "v1.0.1".to_string(),
            previous: "v1.0.0".to_string(),
        }]
    );
}

#[test]
fn test_unresolvable_tag_aborts_history() {
    let scratch = three_releases();
    let repo = Git2Repository::open(scratch.path()).unwrap();
    let versions = vec![
        SemanticVersion::new(2, 0, 0, "", "v2.0.0"),
        SemanticVersion::new(3, 0, 0, "", "v3.0.0"),
    ];

    let err = ReleaseHistoryBuilder::new(&repo)
        .build(&versions)
        .unwrap_err();
    assert!(
        matches!(&err, ReleaseNotesError::TagNotFound(tag) if tag == "v3.0.0"),
        "expected TagNotFound for v3.0.0, got: {}",
        err
    );
}
