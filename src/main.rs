use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use git_relnotes::cli::{run_create_workflow, CreateWorkflowArgs};
use git_relnotes::{config, ui};

#[derive(Parser)]
#[command(
    name = "git-relnotes",
    about = "Aggregate release notes from commit message footers into one document",
    version
)]
struct Cli {
    #[arg(short, long, help = "Custom configuration file path", global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase log verbosity (-v, -vv, -vvv)")]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render release notes for every tagged release of a repository
    Create(CreateArgs),
}

#[derive(clap::Args)]
struct CreateArgs {
    #[arg(default_value = ".", help = "Path of the repository to read")]
    repository: PathBuf,

    #[arg(long, help = "First tag of the range (informational)")]
    from: Option<String>,

    #[arg(long, help = "Last reference of the range (informational)")]
    to: Option<String>,

    #[arg(short, long, help = "Output file [default: ./RELEASENOTES.md]")]
    output: Option<PathBuf>,

    #[arg(long, alias = "vp", help = "Prefix in front of version numbers in tag names")]
    version_prefix: Option<String>,

    #[arg(short, long, help = "Handlebars template file [default: ./releasenotes.tmpl]")]
    template: Option<PathBuf>,

    #[arg(short, long, help = "Overwrite the output file without asking")]
    force: bool,

    #[arg(long, help = "Print the rendered notes instead of writing them")]
    dry_run: bool,
}

impl From<CreateArgs> for CreateWorkflowArgs {
    fn from(args: CreateArgs) -> Self {
        CreateWorkflowArgs {
            repository: args.repository,
            from: args.from,
            to: args.to,
            output: args.output,
            version_prefix: args.version_prefix,
            template: args.template,
            force: args.force,
            dry_run: args.dry_run,
        }
    }
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,git_relnotes=info".to_string(),
            2 => "info,git_relnotes=debug".to_string(),
            _ => "debug,git_relnotes=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(Command::Create(args)) = cli.command else {
        eprintln!("You must specify a subcommand.");
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = run_create_workflow(args.into(), config) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
