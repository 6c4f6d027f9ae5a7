use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "dbdcare-cli", about = "Terminal client for the DBD Care api")]
pub(crate) struct Cli {
    /// Base url of the server
    #[arg(long, env = "DBDCARE_SERVER", default_value = "http://127.0.0.1:3030/")]
    pub(crate) server: Url,

    /// JSON file holding the session and the checklist progress
    #[arg(long, env = "DBDCARE_STATE", default_value = "dbdcare-cli.json")]
    pub(crate) state: PathBuf,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Create an account and log in with it
    Register(Account),

    Login(Account),

    Logout,

    Whoami,

    /// Server and database health
    Status,

    /// Take the quiz interactively
    Quiz(Quiz),

    #[command(subcommand)]
    Checklist(Checklist),

    /// Write the json schema of the seed bundle
    Schema(Schema),
}

#[derive(Debug, Parser)]
pub(crate) struct Account {
    pub(crate) username: String,

    /// Asked interactively when missing
    #[arg(long, env = "DBDCARE_PASSWORD", hide_env_values = true)]
    pub(crate) password: Option<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct Quiz {
    /// Refuse to move on or finish while a question is unanswered
    #[arg(long)]
    pub(crate) require_all: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Checklist {
    List,

    /// Flip one item, given by its number in the list or its id
    Toggle { item: String },

    /// Uncheck every item
    Reset {
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Parser)]
pub(crate) struct Schema {
    #[arg(required = true)]
    pub(crate) output_folder: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checklist_reset() {
        let cli = Cli::try_parse_from(["dbdcare-cli", "checklist", "reset", "--yes"]).unwrap();
        assert!(matches!(cli.command, Commands::Checklist(Checklist::Reset { yes: true })));
        assert_eq!(cli.server.as_str(), "http://127.0.0.1:3030/");
    }

    #[test]
    fn test_parse_quiz_policy() {
        let cli = Cli::try_parse_from([
            "dbdcare-cli",
            "--server",
            "https://dbdcare.example/",
            "quiz",
            "--require-all",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Quiz(Quiz { require_all: true })));
        assert_eq!(cli.server.host_str(), Some("dbdcare.example"));
    }

    #[test]
    fn test_login_requires_username() {
        assert!(Cli::try_parse_from(["dbdcare-cli", "login"]).is_err());
    }
}
