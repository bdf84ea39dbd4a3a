use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "scaffold",
    version,
    about = "Create the standard project folder tree under an assets directory"
)]
pub struct Cli {
    /// Name of the root folder created under the base directory.
    #[arg(required_unless_present = "print_layout")]
    pub root_name: Option<String>,
    /// Directory the root folder is created in.
    #[arg(short = 'b', long = "base-dir", default_value = "Assets")]
    pub base_dir: Utf8PathBuf,
    /// TOML file with a custom `folders = [...]` list.
    #[arg(short = 'l', long = "layout")]
    pub layout: Option<Utf8PathBuf>,
    /// Print the effective layout as TOML and exit.
    #[arg(long = "print-layout")]
    pub print_layout: bool,
    /// Show the directories that would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    /// Command run once after scaffolding; the root folder path is appended to it.
    /// Must come last: every following argument, hyphenated or not, belongs to the command.
    #[arg(
        long = "refresh-cmd",
        value_name = "CMD",
        num_args = 1..,
        allow_hyphen_values = true
    )]
    pub refresh_cmd: Vec<String>,
    /// Log more detail (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
    /// Only report errors.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
