pub(crate) mod auth;
pub(crate) mod checklist;
pub(crate) mod opt;
pub(crate) mod prompt;
pub(crate) mod quiz;
pub(crate) mod schema;

use crate::client::ApiClient;
use crate::state::{Session, StateFile};
use anyhow::Error;
use opt::{Cli, Commands};
use prompt::Prompter;
use std::path::PathBuf;
use url::Url;

/// Shared by every command that talks to the server.
pub(crate) struct Context {
    pub(crate) client: ApiClient,
    pub(crate) state: StateFile,
    pub(crate) session: Option<Session>,
    pub(crate) prompter: Prompter,
}

impl Context {
    async fn new(server: Url, state: PathBuf) -> Result<Self, Error> {
        let state = StateFile::new(state);
        let session = state.session().await;
        let client = ApiClient::new(server, session.as_ref().map(|s| s.token.clone()))?;
        Ok(Self {
            client,
            state,
            session,
            prompter: Prompter::new(),
        })
    }
}

async fn status(context: Context) -> Result<(), Error> {
    let status = context.client.status().await?;
    println!("database: {}", status.database);
    println!("version: {}", status.version);
    Ok(())
}

pub(crate) async fn exec(cli: Cli) -> Result<(), Error> {
    let Cli { server, state, command } = cli;
    if let Commands::Schema(schema) = command {
        return schema::exec(schema);
    }
    let context = Context::new(server, state).await?;

    match command {
        Commands::Register(account) => auth::register(context, account).await,
        Commands::Login(account) => auth::login(context, account).await,
        Commands::Logout => auth::logout(context).await,
        Commands::Whoami => auth::whoami(context).await,
        Commands::Status => status(context).await,
        Commands::Quiz(quiz) => quiz::run(context, quiz).await,
        Commands::Checklist(command) => checklist::run(context, command).await,
        Commands::Schema(_) => Ok(()),
    }
}
