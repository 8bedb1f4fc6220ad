use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "quicknotes", version = get_version())]
#[command(about = "Quick local notes: create, edit, search and delete", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the notes records
    #[arg(long, global = true, env = "QUICK_NOTES_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note and select it
    #[command(alias = "n")]
    New {
        /// Title of the note
        #[arg(short, long)]
        title: Option<String>,

        /// Content of the note
        #[arg(short, long)]
        content: Option<String>,
    },

    /// List notes, most recently updated first
    #[command(alias = "ls")]
    List {
        /// Only show notes whose title or content contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a note (the selected one when no id is given)
    #[command(alias = "v")]
    Show {
        /// Id or unique id prefix
        id: Option<String>,
    },

    /// Change a note's title and/or content
    #[command(alias = "e")]
    Edit {
        /// Id or unique id prefix
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Select a note
    Select {
        /// Id or unique id prefix
        id: String,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Id or unique id prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the resolved configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["quicknotes"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_edit_with_fields() {
        let cli =
            Cli::try_parse_from(["quicknotes", "e", "abc", "-t", "Title", "--content", "Body"])
                .unwrap();
        match cli.command {
            Some(Commands::Edit { id, title, content }) => {
                assert_eq!(id, "abc");
                assert_eq!(title.as_deref(), Some("Title"));
                assert_eq!(content.as_deref(), Some("Body"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn delete_requires_id() {
        assert!(Cli::try_parse_from(["quicknotes", "rm"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["quicknotes", "ls", "-v", "--data-dir", "/tmp/qn"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/qn")));
    }
}
