//! The caller-facing client: one method per remote operation.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use robtop_crypto::encode_gd_message_body;

use crate::entity::{GdLevel, GdMessage, GdUser, level, message, user};
use crate::paginator::Paginator;
use crate::pipeline::Pipeline;
use crate::request::Request;
use crate::routes::Route;
use crate::session::Session;
use crate::{Error, Result};

/// Leaderboard selection for [`GdClient::get_leaderboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardKind {
    /// Global star leaderboard
    Top,
    /// Creator points leaderboard
    Creators,
    /// Weekly star gains
    Week,
    /// The account's friends
    Friends,
    /// Players ranked around the account
    Relative,
}

impl LeaderboardKind {
    /// The `type` form value the endpoint expects.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Creators => "creators",
            Self::Week => "week",
            Self::Friends => "friends",
            Self::Relative => "relative",
        }
    }
}

/// Demon difficulty ratings for [`GdClient::rate_demon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemonDifficulty {
    Easy,
    Medium,
    Hard,
    Insane,
    Extreme,
}

impl DemonDifficulty {
    /// The numeric `rating` form value the endpoint expects.
    #[must_use]
    pub fn wire_value(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Insane => 4,
            Self::Extreme => 5,
        }
    }
}

/// Decoder for acknowledgement-only endpoints: any non-sentinel body is
/// success and carries no data.
fn decode_ack(_body: &str) -> gd_format::Result<()> {
    Ok(())
}

/// A Geometry Dash client, anonymous or logged in.
///
/// Built by [`GdClientBuilder`](crate::GdClientBuilder). All remote methods
/// are cheap to call concurrently; the client shares one connection pool and
/// one result cache, and can be cloned cheaply.
///
/// Methods on the authenticated surface return [`Error::NotAuthenticated`]
/// synchronously, before any network work, when the client was built without
/// credentials.
#[derive(Clone)]
pub struct GdClient {
    pipeline: Arc<Pipeline>,
}

impl GdClient {
    pub(crate) fn from_pipeline(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// The session this client is logged into, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.pipeline.session()
    }

    /// Whether this client was built with credentials.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    fn require_session(&self) -> Result<&Session> {
        self.session().ok_or(Error::NotAuthenticated)
    }

    fn require_registered(account_id: u64, what: &str) -> Result<()> {
        if account_id == 0 {
            return Err(Error::invalid_argument(format!(
                "{what} must be a registered account (account ID > 0)"
            )));
        }
        Ok(())
    }

    // --- anonymous surface -------------------------------------------------

    /// Fetch the full profile of a user by account ID.
    pub async fn get_user(&self, account_id: u64) -> Result<GdUser> {
        Self::require_registered(account_id, "profile target")?;
        let request = Request::new(Route::UserInfo, user::decode_profile)
            .param("targetAccountID", account_id.to_string());
        self.pipeline.fetch(request).await
    }

    /// Search for users by name, returning one page of results.
    pub async fn search_users(
        &self,
        query: impl Into<String>,
        page: u32,
    ) -> Result<Paginator<GdUser>> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(Error::invalid_argument("search query must not be empty"));
        }
        Paginator::open(
            Arc::clone(&self.pipeline),
            Route::UserSearch,
            vec![("str", query), ("total", "0".to_string())],
            user::decode_search_page,
            page,
        )
        .await
    }

    /// Search for a user by name and return the best match.
    pub async fn search_user(&self, query: impl Into<String>) -> Result<GdUser> {
        let page = self.search_users(query, 0).await?;
        page.into_items()
            .into_iter()
            .next()
            .ok_or(Error::MissingAccess)
    }

    /// Search levels by name, returning one page of results.
    pub async fn search_levels(
        &self,
        query: impl Into<String>,
        page: u32,
    ) -> Result<Paginator<GdLevel>> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(Error::invalid_argument("search query must not be empty"));
        }
        Paginator::open(
            Arc::clone(&self.pipeline),
            Route::LevelSearch,
            vec![
                ("str", query),
                ("type", "0".to_string()),
                ("total", "0".to_string()),
            ],
            level::decode_search_page,
            page,
        )
        .await
    }

    // --- authenticated surface ---------------------------------------------

    /// Fetch one page of the account's private message inbox.
    ///
    /// An empty inbox is reported by the server with the same sentinel as a
    /// denied request, so it surfaces as [`Error::MissingAccess`] rather
    /// than an empty paginator.
    pub async fn get_private_messages(&self, page: u32) -> Result<Paginator<GdMessage>> {
        self.require_session()?;
        Paginator::open(
            Arc::clone(&self.pipeline),
            Route::MessageInbox,
            vec![("total", "0".to_string())],
            message::decode_inbox_page,
            page,
        )
        .await
    }

    /// Download a single private message, including its descrambled body.
    pub async fn download_private_message(&self, message_id: u64) -> Result<GdMessage> {
        self.require_session()?;
        if message_id == 0 {
            return Err(Error::invalid_argument("message ID must be > 0"));
        }
        let request = Request::new(Route::MessageDownload, message::decode_download)
            .param("messageID", message_id.to_string());
        self.pipeline.fetch(request).await
    }

    /// Send a private message to a registered user.
    pub async fn send_private_message(
        &self,
        recipient_account_id: u64,
        subject: &str,
        body: &str,
    ) -> Result<()> {
        self.require_session()?;
        Self::require_registered(recipient_account_id, "message recipient")?;
        let request = Request::new(Route::MessageSend, decode_ack)
            .param("toAccountID", recipient_account_id.to_string())
            .param("subject", URL_SAFE.encode(subject))
            .param("body", encode_gd_message_body(body));
        self.pipeline.fetch(request).await
    }

    /// Suggest a star rating for a level, between 1 and 10 inclusive.
    pub async fn rate_stars(&self, level_id: u64, stars: u8, udid: &str) -> Result<()> {
        self.require_session()?;
        if level_id == 0 {
            return Err(Error::invalid_argument("level ID must be > 0"));
        }
        if !(1..=10).contains(&stars) {
            return Err(Error::invalid_argument(
                "star rating must be between 1 and 10",
            ));
        }
        let request = Request::new(Route::RateStars, decode_ack)
            .param("levelID", level_id.to_string())
            .param("stars", stars.to_string())
            .param("udid", udid.to_string());
        self.pipeline.fetch(request).await
    }

    /// Suggest a demon difficulty for a level.
    pub async fn rate_demon(&self, level_id: u64, difficulty: DemonDifficulty) -> Result<()> {
        self.require_session()?;
        if level_id == 0 {
            return Err(Error::invalid_argument("level ID must be > 0"));
        }
        let request = Request::new(Route::RateDemon, decode_ack)
            .param("levelID", level_id.to_string())
            .param("rating", difficulty.wire_value().to_string());
        self.pipeline.fetch(request).await
    }

    /// Fetch a leaderboard with at most `count` entries (1 to 200).
    pub async fn get_leaderboard(
        &self,
        kind: LeaderboardKind,
        count: u32,
    ) -> Result<Vec<GdUser>> {
        self.require_session()?;
        if !(1..=200).contains(&count) {
            return Err(Error::invalid_argument(
                "leaderboard count must be between 1 and 200",
            ));
        }
        let request = Request::new(Route::Leaderboard, user::decode_list)
            .param("type", kind.as_str())
            .param("count", count.to_string());
        self.pipeline.fetch(request).await
    }

    /// Fetch the account's friend list.
    pub async fn get_friends(&self) -> Result<Vec<GdUser>> {
        self.require_session()?;
        let request = Request::new(Route::UserList, user::decode_list).param("type", "0");
        self.pipeline.fetch(request).await
    }

    /// Fetch the accounts this account has blocked.
    pub async fn get_blocked_users(&self) -> Result<Vec<GdUser>> {
        self.require_session()?;
        let request = Request::new(Route::UserList, user::decode_list).param("type", "1");
        self.pipeline.fetch(request).await
    }

    /// Block a registered user.
    pub async fn block_user(&self, target_account_id: u64) -> Result<()> {
        self.require_session()?;
        Self::require_registered(target_account_id, "block target")?;
        let request = Request::new(Route::BlockUser, decode_ack)
            .param("targetAccountID", target_account_id.to_string());
        self.pipeline.fetch(request).await
    }

    /// Unblock a registered user.
    pub async fn unblock_user(&self, target_account_id: u64) -> Result<()> {
        self.require_session()?;
        Self::require_registered(target_account_id, "unblock target")?;
        let request = Request::new(Route::UnblockUser, decode_ack)
            .param("targetAccountID", target_account_id.to_string());
        self.pipeline.fetch(request).await
    }
}

impl fmt::Debug for GdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GdClient")
            .field("host", &self.pipeline.base_url())
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
