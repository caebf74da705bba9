use super::{AccountsApi, UserQuery};
use crate::model::EclipseUser;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

/// `reqwest`-backed [`AccountsApi`] talking to `GET /account/profile`.
///
/// A thin pass-through binding: no retries, no caching, and no validation
/// of the response beyond deserialization.
pub struct HttpAccountsApi {
    base_url: String,
    client: Client,
}

impl HttpAccountsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Use a preconfigured client (timeouts, proxies) owned by the caller.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl AccountsApi for HttpAccountsApi {
    async fn get_users(&self, auth_bearer: &str, query: &UserQuery) -> Result<Vec<EclipseUser>> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(uid) = &query.uid {
            params.push(("uid", uid));
        }
        if let Some(name) = &query.name {
            params.push(("name", name));
        }
        if let Some(mail) = &query.mail {
            params.push(("mail", mail));
        }

        let resp = self
            .client
            .get(format!("{}/account/profile", self.base_url))
            .header(reqwest::header::AUTHORIZATION, auth_bearer)
            .query(&params)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Accounts API error ({}): {}", status, text);
        }

        Ok(resp.json().await?)
    }
}
