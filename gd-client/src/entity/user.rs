//! User profiles, search results, and score rows.

use gd_format::{IndexedMap, PageInfo, split_entities};

/// A Geometry Dash player.
///
/// Both the full profile endpoint and the search/leaderboard endpoints
/// decode into this type; fields the leaner endpoints omit fall back to
/// their defaults, and `global_rank` is only present on profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdUser {
    /// Display name
    pub username: String,
    /// Player ID (assigned per installation, predates accounts)
    pub player_id: u64,
    /// Registered account ID
    pub account_id: u64,
    /// Stars collected
    pub stars: u32,
    /// Demons beaten
    pub demons: u32,
    /// Creator points
    pub creator_points: u32,
    /// Secret coins
    pub secret_coins: u32,
    /// User coins
    pub user_coins: u32,
    /// Diamonds
    pub diamonds: u32,
    /// Cube/icon ID shown next to the name
    pub icon_id: u32,
    /// Primary color index
    pub color1: u8,
    /// Secondary color index
    pub color2: u8,
    /// Position in the score row this user came from, if any
    pub leaderboard_rank: Option<u32>,
    /// Global star ranking, only reported by the profile endpoint
    pub global_rank: Option<u32>,
}

fn optional_u32(map: &IndexedMap, index: u8) -> gd_format::Result<Option<u32>> {
    match map.get(index) {
        None | Some("") | Some("0") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| gd_format::Error::invalid_field(index, value)),
    }
}

fn decode_user(segment: &str) -> gd_format::Result<GdUser> {
    let map = IndexedMap::parse(segment, ':')?;
    Ok(GdUser {
        username: map.require(1)?.to_string(),
        player_id: map.require_parsed(2)?,
        account_id: map.require_parsed(16)?,
        stars: map.parsed_or_default(3)?,
        demons: map.parsed_or_default(4)?,
        creator_points: map.parsed_or_default(8)?,
        secret_coins: map.parsed_or_default(13)?,
        user_coins: map.parsed_or_default(17)?,
        diamonds: map.parsed_or_default(46)?,
        icon_id: map.parsed_or_default(9)?,
        color1: map.parsed_or_default(10)?,
        color2: map.parsed_or_default(11)?,
        leaderboard_rank: optional_u32(&map, 6)?,
        global_rank: optional_u32(&map, 30)?,
    })
}

/// Decode a full profile response (`getGJUserInfo20`): one user, no trailer.
pub(crate) fn decode_profile(body: &str) -> gd_format::Result<GdUser> {
    decode_user(body)
}

/// Decode a user search page (`getGJUsers20`): `users#trailer`.
pub(crate) fn decode_search_page(body: &str) -> gd_format::Result<(Vec<GdUser>, PageInfo)> {
    let (list, trailer) = match body.split_once('#') {
        Some((list, trailer)) => (list, Some(trailer)),
        None => (body, None),
    };

    let users = split_entities(list, '|')
        .into_iter()
        .map(decode_user)
        .collect::<gd_format::Result<Vec<_>>>()?;

    let info = match trailer {
        Some(raw) => PageInfo::parse(raw)?,
        // Some private servers drop the trailer; treat the result as the
        // only page rather than failing the whole decode.
        None => PageInfo::single_page(users.len() as u32),
    };

    Ok((users, info))
}

/// Decode an untrailed user list (`getGJScores20`, `getGJUserList20`).
pub(crate) fn decode_list(body: &str) -> gd_format::Result<Vec<GdUser>> {
    split_entities(body, '|')
        .into_iter()
        .map(decode_user)
        .collect()
}
