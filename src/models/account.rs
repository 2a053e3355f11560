use serde::Serialize;

/// Stored credential row.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: String, // email-like identifier, ⇔ accounts.id
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 PHC string
    pub created_at: String,
}

/// Explicit per-request account context.
///
/// Every repository and logic call receives one of these; nothing reads the
/// current account from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountContext {
    pub account_id: String,
}

impl AccountContext {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.account_id
    }
}
