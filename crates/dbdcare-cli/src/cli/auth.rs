use crate::cli::Context;
use crate::cli::opt::Account;
use crate::state::Session;
use anyhow::{Result, anyhow};
use dbdcare_model::login::{Credentials, Registration, Token};
use std::error::Error;

impl From<Token> for Session {
    fn from(token: Token) -> Self {
        Self {
            username: token.user.username,
            role: token.user.role,
            token: token.access_token,
        }
    }
}

fn password(context: &mut Context, given: Option<String>, label: &str) -> Result<String> {
    if let Some(password) = given {
        return Ok(password);
    }
    context.prompter.ask(label)?.ok_or_else(|| anyhow!("Aborted"))
}

async fn store(context: &Context, token: Token) -> Result<()> {
    let session = Session::from(token);
    context.state.set_session(Some(&session)).await?;
    println!("Masuk sebagai {} ({})", session.username, session.role);
    Ok(())
}

pub(crate) async fn register(mut context: Context, account: Account) -> Result<()> {
    let (password, confirm_password) = match account.password {
        Some(password) => (password.clone(), password),
        None => (
            password(&mut context, None, "Password ")?,
            password(&mut context, None, "Ulangi password ")?,
        ),
    };
    let token = context
        .client
        .register(&Registration {
            username: account.username,
            password,
            confirm_password,
        })
        .await?;
    store(&context, token).await
}

pub(crate) async fn login(mut context: Context, account: Account) -> Result<()> {
    let password = password(&mut context, account.password, "Password ")?;
    let token = context
        .client
        .login(&Credentials {
            username: account.username,
            password,
        })
        .await?;
    store(&context, token).await
}

pub(crate) async fn logout(context: Context) -> Result<()> {
    if context.session.is_none() {
        println!("Belum masuk");
        return Ok(());
    }
    if let Err(error) = context.client.logout().await {
        tracing::warn!(error = &error as &dyn Error, "server logout failed, dropping the local session");
    }
    context.state.set_session(None).await?;
    println!("Berhasil keluar");
    Ok(())
}

pub(crate) async fn whoami(context: Context) -> Result<()> {
    match context.client.whoami().await {
        Ok(user) => {
            println!("{} ({})", user.username, user.role);
            Ok(())
        }
        Err(error) if error.is_unauthorized() => {
            if context.session.is_some() {
                tracing::info!("stored session is no longer valid");
                context.state.set_session(None).await?;
            }
            println!("Belum masuk");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
