//! Login credentials and the authenticated session identity.

use std::fmt;

use robtop_crypto::encode_gd_account_password;

/// Username and password pair handed to the builder for login.
#[derive(Clone)]
pub struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl Credentials {
    /// Create a credentials pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Immutable identity of a logged-in account.
///
/// Created once by the builder after a successful login exchange and never
/// mutated. The plaintext password is retained only for caller inspection;
/// the wire carries the [`robtop_crypto`] credential token instead.
#[derive(Clone)]
pub struct Session {
    account_id: u64,
    player_id: u64,
    username: String,
    password: String,
    gjp: String,
}

impl Session {
    pub(crate) fn new(
        account_id: u64,
        player_id: u64,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password = password.into();
        let gjp = encode_gd_account_password(&password);
        Self {
            account_id,
            player_id,
            username: username.into(),
            password,
            gjp,
        }
    }

    /// Account ID of the logged-in account.
    #[must_use]
    pub fn account_id(&self) -> u64 {
        self.account_id
    }

    /// Player ID of the logged-in account.
    #[must_use]
    pub fn player_id(&self) -> u64 {
        self.player_id
    }

    /// Username of the logged-in account.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Plaintext password this session was built with.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Append the session-scoped parameters to an outgoing parameter set.
    ///
    /// This is the authentication injection hook: operation code builds
    /// requests without knowing about credentials, and the pipeline calls
    /// this for every dispatch on an authenticated client.
    pub(crate) fn inject(&self, params: &mut Vec<(&'static str, String)>) {
        params.push(("accountID", self.account_id.to_string()));
        params.push(("gjp", self.gjp.clone()));
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account_id", &self.account_id)
            .field("player_id", &self.player_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("gjp", &"<redacted>")
            .finish()
    }
}
