//! Remote operation catalog: endpoint paths, secrets, cacheability.

/// Base URL of the official servers.
pub const DEFAULT_HOST: &str = "http://www.boomlings.com/database";

/// `gameVersion` sent with every request.
pub const GAME_VERSION: &str = "21";

/// `binaryVersion` sent with every request.
pub const BINARY_VERSION: &str = "34";

/// `secret` value for regular endpoints.
pub const COMMON_SECRET: &str = "Wmfd2893gb7";

/// `secret` value for the account login endpoint.
pub const ACCOUNT_SECRET: &str = "Wmfv3899gc9";

/// One logical remote operation.
///
/// # Example
///
/// ```
/// use gd_client::routes::Route;
///
/// assert_eq!(Route::MessageInbox.as_path(), "/getGJMessages20.php");
/// assert!(Route::MessageInbox.is_cacheable());
/// assert!(!Route::MessageSend.is_cacheable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Account login exchange
    Login,
    /// Full user profile by account ID
    UserInfo,
    /// User search by name
    UserSearch,
    /// Private message inbox
    MessageInbox,
    /// Single private message with body
    MessageDownload,
    /// Send a private message
    MessageSend,
    /// Rate the star count of a level
    RateStars,
    /// Rate the demon difficulty of a level
    RateDemon,
    /// Player/creator leaderboards
    Leaderboard,
    /// Friend or blocked-user list
    UserList,
    /// Block a user
    BlockUser,
    /// Unblock a user
    UnblockUser,
    /// Level search/browse
    LevelSearch,
}

impl Route {
    /// Endpoint path below the server base URL.
    #[must_use]
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Login => "/accounts/loginGJAccount.php",
            Self::UserInfo => "/getGJUserInfo20.php",
            Self::UserSearch => "/getGJUsers20.php",
            Self::MessageInbox => "/getGJMessages20.php",
            Self::MessageDownload => "/downloadGJMessage20.php",
            Self::MessageSend => "/uploadGJMessage20.php",
            Self::RateStars => "/rateGJStars211.php",
            Self::RateDemon => "/rateGJDemon21.php",
            Self::Leaderboard => "/getGJScores20.php",
            Self::UserList => "/getGJUserList20.php",
            Self::BlockUser => "/blockGJUser20.php",
            Self::UnblockUser => "/unblockGJUser20.php",
            Self::LevelSearch => "/getGJLevels21.php",
        }
    }

    /// The `secret` form field the endpoint expects.
    #[must_use]
    pub fn secret(&self) -> &'static str {
        match self {
            Self::Login => ACCOUNT_SECRET,
            _ => COMMON_SECRET,
        }
    }

    /// Whether a successful result may be served from the cache.
    ///
    /// Operations that mutate remote state must re-dispatch every time: a
    /// memoized "ok" would silently swallow subsequent sends.
    #[must_use]
    pub fn is_cacheable(&self) -> bool {
        !matches!(
            self,
            Self::Login
                | Self::MessageSend
                | Self::RateStars
                | Self::RateDemon
                | Self::BlockUser
                | Self::UnblockUser
        )
    }
}
