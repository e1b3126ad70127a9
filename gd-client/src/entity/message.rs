//! Private messages.

use gd_format::{IndexedMap, PageInfo, split_entities};
use robtop_crypto::decode_gd_message_body;

use super::decode_base64_text;

/// A private message.
///
/// The inbox endpoint returns everything except the body; the body is only
/// present after a [`download`](crate::GdClient::download_private_message)
/// of the individual message, descrambled from its XOR/base64 wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdMessage {
    /// Message ID
    pub id: u64,
    /// Account ID of the sender
    pub sender_account_id: u64,
    /// Player ID of the sender
    pub sender_player_id: u64,
    /// Display name of the sender
    pub sender_name: String,
    /// Subject line
    pub subject: String,
    /// Message body, only present on a downloaded message
    pub body: Option<String>,
    /// Human-readable age as reported by the server ("2 days")
    pub age: String,
    /// Whether the message has been read
    pub read: bool,
    /// Whether this is a message the account sent rather than received
    pub outgoing: bool,
}

fn decode_message(segment: &str) -> gd_format::Result<GdMessage> {
    let map = IndexedMap::parse(segment, ':')?;

    let subject = decode_base64_text(4, map.require(4)?)?;
    let body = match map.get(5) {
        None | Some("") => None,
        Some(scrambled) => Some(
            decode_gd_message_body(scrambled)
                .map_err(|_| gd_format::Error::invalid_field(5, scrambled))?,
        ),
    };

    Ok(GdMessage {
        id: map.require_parsed(1)?,
        sender_account_id: map.require_parsed(2)?,
        sender_player_id: map.parsed_or_default(3)?,
        sender_name: map.get_or_default(6),
        subject,
        body,
        age: map.get_or_default(7),
        read: map.get(8) == Some("1"),
        outgoing: map.get(9) == Some("1"),
    })
}

/// Decode an inbox page (`getGJMessages20`): `messages#trailer`.
pub(crate) fn decode_inbox_page(body: &str) -> gd_format::Result<(Vec<GdMessage>, PageInfo)> {
    let (list, trailer) = match body.split_once('#') {
        Some((list, trailer)) => (list, Some(trailer)),
        None => (body, None),
    };

    let messages = split_entities(list, '|')
        .into_iter()
        .map(decode_message)
        .collect::<gd_format::Result<Vec<_>>>()?;

    let info = match trailer {
        Some(raw) => PageInfo::parse(raw)?,
        None => PageInfo::single_page(messages.len() as u32),
    };

    Ok((messages, info))
}

/// Decode a single downloaded message (`downloadGJMessage20`).
pub(crate) fn decode_download(body: &str) -> gd_format::Result<GdMessage> {
    decode_message(body)
}
