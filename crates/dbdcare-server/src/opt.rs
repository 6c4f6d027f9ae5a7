use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dbdcare", about = "Serve the DBD Care education api")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(long, value_delimiter = ',', help = "Origins allowed by CORS")]
    pub(crate) origins: Vec<String>,

    #[arg(long, help = "Seed bundle used by the seed maintenance action, the embedded one if unset")]
    pub(crate) seed: Option<PathBuf>,

    #[arg(
        long,
        env = "DBDCARE_ADMIN_USERNAME",
        requires = "admin_password",
        help = "Admin account created at startup if missing"
    )]
    pub(crate) admin_username: Option<String>,

    #[arg(long, env = "DBDCARE_ADMIN_PASSWORD", requires = "admin_username", hide_env_values = true)]
    pub(crate) admin_password: Option<String>,

    #[arg(long = "sentry-dsn", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(long, default_value = "dev", help = "Set the environment used by sentry and prometheus")]
    pub(crate) env: String,

    #[command(flatten)]
    pub(crate) db: Db,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "dbdcare",
            "run",
            "--port",
            "8080",
            "--origins",
            "http://localhost:5173,https://dbdcare.id",
            "--admin-username",
            "admin",
            "--admin-password",
            "rahasia",
            "--db-max-connections",
            "4",
        ])
        .unwrap();
        let Commands::Run(run) = cli.command;
        assert_eq!(run.port, Some(8080));
        assert_eq!(run.origins.len(), 2);
        assert_eq!(run.admin_username.as_deref(), Some("admin"));
        assert_eq!(run.db.db_max_connections, Some(4));
        assert_eq!(run.env, "dev");
        assert!(run.seed.is_none());
    }

    #[test]
    fn test_admin_password_required() {
        let res = Cli::try_parse_from(["dbdcare", "run", "--admin-username", "admin"]);
        assert!(res.is_err());
    }
}
