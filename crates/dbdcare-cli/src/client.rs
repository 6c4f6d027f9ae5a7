//! Thin typed wrapper over the `/api/v0` routes.

pub(crate) mod error;

use crate::client::error::Error;
use dbdcare_model::activity::{Activity, NewActivity};
use dbdcare_model::checklist::ChecklistItem;
use dbdcare_model::login::{Credentials, Registration, Token};
use dbdcare_model::quiz::{Quiz, QuizResult, QuizSubmission};
use dbdcare_model::status::Status;
use dbdcare_model::user::User;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub(crate) struct ApiUrl {
    url: Url,
}

impl ApiUrl {
    pub(crate) fn new(url: Url) -> Self {
        Self { url }
    }

    pub(crate) fn for_api(&self, api_path: &str) -> Result<Url, Error> {
        Ok(self.url.join("api/v0/")?.join(api_path)?)
    }
}

pub(crate) struct ApiClient {
    http: reqwest::Client,
    base_url: ApiUrl,
    token: Option<String>,
}

impl ApiClient {
    pub(crate) fn new(base_url: Url, token: Option<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: ApiUrl::new(base_url),
            token,
        })
    }

    pub(crate) fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, Error> {
        let url = self.base_url.for_api(path)?;
        tracing::debug!(%method, %url, "sending api request");
        Ok(self.http.request(method, url))
    }

    fn authenticated(&self, method: Method, path: &str) -> Result<RequestBuilder, Error> {
        let token = self.token.as_deref().ok_or(Error::NotLoggedIn)?;
        Ok(self.request(method, path)?.bearer_auth(token))
    }

    async fn send(builder: RequestBuilder) -> Result<Response, Error> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(Value::as_str)
                .map_or_else(|| body.to_string(), str::to_owned),
            Err(_) => status.canonical_reason().unwrap_or("request failed").to_owned(),
        };
        Err(Error::Status { status, message })
    }

    async fn json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, Error> {
        Ok(Self::send(builder).await?.json().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, Error> {
        Self::json(self.request(Method::POST, path)?.json(body)).await
    }

    pub(crate) async fn status(&self) -> Result<Status, Error> {
        // an unhealthy server still answers with a status body
        let response = self.request(Method::GET, "status")?.send().await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn register(&self, registration: &Registration) -> Result<Token, Error> {
        self.post_json("auth/register", registration).await
    }

    pub(crate) async fn login(&self, credentials: &Credentials) -> Result<Token, Error> {
        self.post_json("auth/login", credentials).await
    }

    pub(crate) async fn logout(&self) -> Result<(), Error> {
        Self::send(self.authenticated(Method::POST, "auth/logout")?).await?;
        Ok(())
    }

    pub(crate) async fn whoami(&self) -> Result<User, Error> {
        Self::json(self.authenticated(Method::GET, "auth/whoami")?).await
    }

    pub(crate) async fn quiz(&self) -> Result<Quiz, Error> {
        Self::json(self.request(Method::GET, "quiz")?).await
    }

    pub(crate) async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResult, Error> {
        Self::json(self.authenticated(Method::POST, "quiz/responses")?.json(submission)).await
    }

    pub(crate) async fn checklist(&self) -> Result<Vec<ChecklistItem>, Error> {
        Self::json(self.request(Method::GET, "checklist")?).await
    }

    pub(crate) async fn log_activity(&self, activity: &NewActivity) -> Result<Activity, Error> {
        Self::json(self.authenticated(Method::POST, "activity")?.json(activity)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_keeps_base_path() {
        let api = ApiUrl::new(Url::parse("https://example.org/dbdcare/").unwrap());
        assert_eq!(
            api.for_api("quiz/responses").unwrap().as_str(),
            "https://example.org/dbdcare/api/v0/quiz/responses"
        );
    }

    #[test]
    fn test_authenticated_requires_token() {
        let client = ApiClient::new(Url::parse("http://127.0.0.1:3030/").unwrap(), None).unwrap();
        assert!(matches!(
            client.authenticated(Method::GET, "auth/whoami"),
            Err(Error::NotLoggedIn)
        ));
    }

    #[test]
    fn test_unauthorized() {
        let error = Error::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            message: "Authentication failed.".to_owned(),
        };
        assert!(error.is_unauthorized());
        assert_eq!(error.to_string(), "Authentication failed. (401 Unauthorized)");
    }
}
