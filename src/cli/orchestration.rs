//! Main workflow orchestration logic
//!
//! This module contains the release-notes workflow behind the `create`
//! subcommand. It keeps CLI argument parsing out of the business logic so the
//! workflow can be driven programmatically and tested without clap.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::boundary::BoundaryWarning;
use crate::config::{self, Config};
use crate::domain::{order_versions, SemanticVersion, VersionOrdering, VersionTagParser};
use crate::error::ReleaseNotesError;
use crate::git::{Git2Repository, Repository};
use crate::history::{ReleaseHistoryBuilder, VersionHistoryEntry};
use crate::render::{RenderData, TemplateRenderer};
use crate::ui;

/// Default value of `--to`, shown in the run banner
pub const DEFAULT_TO: &str = "master";

/// Arguments for the create workflow
///
/// Mirrors the CLI arguments. `None` means "use the configured value".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateWorkflowArgs {
    /// Path inside the repository to read
    pub repository: PathBuf,

    /// Informational start of the range; the whole history is always processed
    pub from: Option<String>,

    /// Informational end of the range; the whole history is always processed
    pub to: Option<String>,

    pub output: Option<PathBuf>,

    pub version_prefix: Option<String>,

    pub template: Option<PathBuf>,

    /// Overwrite an existing output file without asking
    pub force: bool,

    /// Print the rendered notes instead of writing them
    pub dry_run: bool,
}

/// Result of a successful create workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Where the notes were (or would have been) written
    pub output: PathBuf,

    /// Whether the output file was written
    pub written: bool,

    /// Number of releases that received a section
    pub releases: usize,

    /// Number of commits that contributed notes
    pub notes: usize,

    pub rendered: String,
}

/// Settings the pipeline needs, independent of where they came from
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    pub prefix: String,
    pub ordering: VersionOrdering,
    pub strict: bool,
}

impl PipelineSettings {
    pub fn from_config(config: &Config) -> Self {
        PipelineSettings {
            prefix: config.versions.prefix.clone(),
            ordering: config.versions.ordering,
            strict: config.render.strict,
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Output of the pipeline before anything touches the filesystem
#[derive(Debug, Clone)]
pub struct GeneratedNotes {
    pub versions: Vec<SemanticVersion>,
    pub history: Vec<VersionHistoryEntry>,
    pub data: RenderData,
    pub rendered: String,
}

/// Release tags of the repository in ascending order
pub fn collect_versions<R: Repository + ?Sized>(
    repo: &R,
    settings: &PipelineSettings,
) -> crate::Result<Vec<SemanticVersion>> {
    let parser = VersionTagParser::new(&settings.prefix)?;
    let tags = repo.list_tags()?;
    let versions = parser.parse_all(tags.iter().map(String::as_str));

    Ok(order_versions(versions, settings.ordering))
}

/// Run tag discovery, history building, assembly and rendering against a repository
pub fn generate_release_notes<R: Repository + ?Sized>(
    repo: &R,
    settings: &PipelineSettings,
    template_source: &str,
) -> crate::Result<GeneratedNotes> {
    let versions = collect_versions(repo, settings)?;
    let history = ReleaseHistoryBuilder::new(repo).build(&versions)?;
    let data = RenderData::assemble(&history);
    let rendered = TemplateRenderer::new(settings.strict).render(template_source, &data)?;

    Ok(GeneratedNotes {
        versions,
        history,
        data,
        rendered,
    })
}

/// Read the template, failing with `MissingTemplate` when it does not exist
pub fn load_template(path: &Path) -> crate::Result<String> {
    if !path.is_file() {
        return Err(ReleaseNotesError::MissingTemplate(path.to_path_buf()));
    }

    Ok(fs::read_to_string(path)?)
}

/// Warnings about the shape of the history that was found
pub fn history_warnings(
    args: &CreateWorkflowArgs,
    settings: &PipelineSettings,
    generated: &GeneratedNotes,
) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    if args.from.is_some() || args.to.is_some() {
        warnings.push(BoundaryWarning::RangeOptionsIgnored {
            from: args.from.clone().unwrap_or_default(),
            to: args.to.clone().unwrap_or_else(|| DEFAULT_TO.to_string()),
        });
    }

    match generated.versions.as_slice() {
        [] => warnings.push(BoundaryWarning::NoVersionTags {
            prefix: settings.prefix.clone(),
        }),
        [only] => warnings.push(BoundaryWarning::SingleVersionTag {
            tag: only.tag.clone(),
        }),
        _ => {}
    }

    for entry in generated.history.iter().filter(|e| e.notes.is_empty()) {
        warnings.push(BoundaryWarning::EmptyRelease {
            tag: entry.version.tag.clone(),
            previous: entry.previous.tag.clone(),
        });
    }

    warnings
}

/// Main create workflow
///
/// 1. Merge CLI arguments over configuration
/// 2. Load the template (fails before touching the repository)
/// 3. Open the repository and generate the notes; the session ends with this step
/// 4. Report versions, ranges and warnings
/// 5. Write the output file, unless this is a dry run or the user declines to overwrite
pub fn run_create_workflow(args: CreateWorkflowArgs, config: Config) -> Result<WorkflowResult> {
    let mut settings = PipelineSettings::from_config(&config);
    if let Some(prefix) = &args.version_prefix {
        settings.prefix = prefix.clone();
    }

    let repository = config::resolve_path(&args.repository)?;
    let template_path = config::resolve_path(
        args.template
            .as_deref()
            .unwrap_or(config.output.template.as_path()),
    )?;
    let output_path = config::resolve_path(
        args.output
            .as_deref()
            .unwrap_or(config.output.path.as_path()),
    )?;

    ui::display_status(&ui::formatter::format_run_banner(
        &repository,
        args.from.as_deref().unwrap_or_default(),
        args.to.as_deref().unwrap_or(DEFAULT_TO),
        &output_path,
    ));

    let template_source = load_template(&template_path)?;

    let generated = {
        let repo = Git2Repository::open(&repository)?;
        generate_release_notes(&repo, &settings, &template_source)?
    };

    ui::display_version_tags(&generated.versions);
    ui::display_history(&generated.history);
    for warning in history_warnings(&args, &settings, &generated) {
        ui::display_boundary_warning(&warning);
    }

    let mut result = WorkflowResult {
        output: output_path,
        written: false,
        releases: generated.history.len(),
        notes: generated.data.note_count(),
        rendered: generated.rendered,
    };

    if args.dry_run {
        ui::display_status("Dry run: release notes were not written");
        println!("{}", result.rendered);
        return Ok(result);
    }

    if !ui::confirm_overwrite(&result.output, args.force)? {
        ui::display_status("Operation cancelled by user.");
        return Ok(result);
    }

    fs::write(&result.output, &result.rendered)?;
    result.written = true;

    ui::display_success(&format!(
        "Wrote {} release notes for {} releases to {}",
        result.notes,
        result.releases,
        result.output.display()
    ));

    Ok(result)
}
