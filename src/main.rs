use bitlet::areas::repository::Repository;
use bitlet::artifacts::core::PagerWriter;
use bitlet::artifacts::core::errors::{BitletError, BitletResult};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BITLET_LOG";

#[derive(Parser)]
#[command(
    name = "bitlet",
    version = "0.1.0",
    about = "A minimal single-user version-control system",
    long_about = "bitlet keeps content-addressed snapshots of a working directory, \
    with branches, a per-branch staging area and three-way merges.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Create a new repository in the current directory",
        long_about = "This command creates the .bitlet directory, records the initial commit \
        and points the master branch at it."
    )]
    Init,
    #[command(name = "add", about = "Stage the working copy of a file")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes as a new commit",
        long_about = "This command snapshots the tracked files of the current tip with the staged \
        additions and removals applied. It fails when nothing is staged."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "rm", about = "Unstage a file, or stage its removal if it is tracked")]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore a working file",
        long_about = "Forms:\n  \
        bitlet checkout <branch>\n  \
        bitlet checkout -- <file>\n  \
        bitlet checkout <commit> -- <file>"
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name, or a commit id when a file is given")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to the given commit")]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge the given branch into the current one")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if error.is_fatal() {
                tracing::error!(?error, "command failed");
            }
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> BitletResult<()> {
    let pwd = std::env::current_dir()?;

    if matches!(command, Commands::Log | Commands::GlobalLog) && should_page() {
        let pager = minus::Pager::new();
        let repository = Repository::open(&pwd, Box::new(PagerWriter::new(pager.clone())))?;

        match command {
            Commands::GlobalLog => repository.global_log()?,
            _ => repository.log()?,
        }

        minus::page_all(pager).map_err(|error| anyhow::anyhow!("pager failed: {}", error))?;
        return Ok(());
    }

    let mut repository = match command {
        Commands::Init => Repository::new(&pwd, Box::new(std::io::stdout()))?,
        _ => Repository::open(&pwd, Box::new(std::io::stdout()))?,
    };

    match command {
        Commands::Init => repository.init(),
        Commands::Add { file } => repository.add(&file),
        Commands::Commit { message } => repository.commit(&message).map(|_| ()),
        Commands::Rm { file } => repository.remove(&file),
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(&message).map(|_| ()),
        Commands::Status => repository.status(),
        Commands::Checkout { target, file } => match (target, file) {
            (Some(branch), None) => repository.checkout_branch(&branch),
            (commit, Some(file)) => repository.checkout_file(commit.as_deref(), &file),
            (None, None) => Err(BitletError::IncorrectOperands),
        },
        Commands::Branch { name } => repository.branch(&name),
        Commands::RmBranch { name } => repository.remove_branch(&name),
        Commands::Reset { commit } => repository.reset(&commit),
        Commands::Merge { branch } => repository.merge(&branch).map(|_| ()),
    }
}

fn should_page() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}
