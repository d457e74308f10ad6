use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ci_semver_tag::cli::{run_release_workflow, ReleaseWorkflowArgs};
use ci_semver_tag::config::{self, CiEnvironment};
use ci_semver_tag::git::Git2Repository;
use ci_semver_tag::hosting::GitLabClient;
use ci_semver_tag::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "ci-semver-tag",
    version,
    about = "Tag the current CI commit with the next semantic version"
)]
struct Args {
    #[arg(short, long, help = "Custom settings file path")]
    config: Option<PathBuf>,

    #[arg(
        short = 'C',
        long = "repo",
        default_value = ".",
        help = "Repository to tag"
    )]
    repo: PathBuf,

    #[arg(long, help = "Remote to push the tag to (overrides settings)")]
    remote: Option<String>,

    #[arg(long, help = "Credentials file to write (defaults to ~/.netrc)")]
    netrc: Option<PathBuf>,

    #[arg(long, help = "Compute the next version without tagging or pushing")]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    log_json: bool,
}

fn main() {
    let args = Args::parse();
    logging::init_tracing(args.log_json, logging::level_for_verbosity(args.verbose));

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // Validate before any git or network access
    let ci = CiEnvironment::from_env()?;

    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(remote) = args.remote {
        settings.remote = remote;
    }
    if let Some(netrc) = args.netrc {
        settings.netrc_path = Some(netrc);
    }

    let repo = Git2Repository::open(&args.repo)?;
    let api = GitLabClient::from_env(&ci);

    let workflow_args = ReleaseWorkflowArgs {
        dry_run: args.dry_run,
    };
    let result = run_release_workflow(&workflow_args, &ci, &settings, &repo, &api)?;

    ui::display_result(&result);
    Ok(())
}
