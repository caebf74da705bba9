mod accounts;

pub use accounts::HttpAccountsApi;

use crate::model::EclipseUser;

use anyhow::Result;
use async_trait::async_trait;

/// Filter criteria for an account lookup. Any subset may be absent; how
/// the filters combine (and their case sensitivity) is defined by the
/// remote account service.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub uid: Option<String>,
    pub name: Option<String>,
    pub mail: Option<String>,
}

impl UserQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_mail(mut self, mail: impl Into<String>) -> Self {
        self.mail = Some(mail.into());
        self
    }
}

/// Binding for the Eclipse Foundation user account API. The endpoint deals
/// with sensitive information, so every call carries a bearer credential;
/// the token is forwarded as-is and validated only by the remote service.
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// Retrieve all accounts matching the given criteria. Transport and
    /// authentication failures propagate to the caller unchanged.
    async fn get_users(&self, auth_bearer: &str, query: &UserQuery) -> Result<Vec<EclipseUser>>;
}
