//! Levels, as returned by the search/browse endpoint.

use std::collections::HashMap;

use gd_format::{IndexedMap, PageInfo, split_entities};

use super::decode_base64_text;

/// Playfield length category (field 15).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelLength {
    #[default]
    Tiny,
    Short,
    Medium,
    Long,
    ExtraLong,
}

impl From<u8> for LevelLength {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Short,
            2 => Self::Medium,
            3 => Self::Long,
            4 => Self::ExtraLong,
            _ => Self::Tiny,
        }
    }
}

/// A level as it appears in search results.
///
/// The search endpoint returns the browsing subset only; the full level data
/// (including the compressed level string) lives behind a separate download
/// endpoint that this client does not expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdLevel {
    /// Level ID
    pub id: u64,
    /// Level name
    pub name: String,
    /// Description, decoded from its base64 wire form
    pub description: String,
    /// Player ID of the creator
    pub creator_player_id: u64,
    /// Creator display name, resolved from the search response's creator
    /// section when the server includes one
    pub creator_name: Option<String>,
    /// Download counter
    pub downloads: u32,
    /// Like counter, negative when disliked into the ground
    pub likes: i64,
    /// Length category
    pub length: LevelLength,
    /// Stars awarded
    pub stars: u32,
    /// Whether the level is rated demon
    pub is_demon: bool,
    /// Whether the level is an auto level
    pub is_auto: bool,
}

fn decode_level(segment: &str) -> gd_format::Result<GdLevel> {
    let map = IndexedMap::parse(segment, ':')?;

    let description = match map.get(3) {
        None | Some("") => String::new(),
        Some(encoded) => decode_base64_text(3, encoded)?,
    };

    Ok(GdLevel {
        id: map.require_parsed(1)?,
        name: map.require(2)?.to_string(),
        description,
        creator_player_id: map.parsed_or_default(6)?,
        creator_name: None,
        downloads: map.parsed_or_default(10)?,
        likes: map.parsed_or_default(14)?,
        length: LevelLength::from(map.parsed_or_default::<u8>(15)?),
        stars: map.parsed_or_default(18)?,
        is_demon: map.get(17) == Some("1"),
        is_auto: map.get(25) == Some("1"),
    })
}

/// Parse the creator section: `playerID:name:accountID|...`.
fn parse_creators(section: &str) -> HashMap<u64, String> {
    let mut creators = HashMap::new();
    for entry in split_entities(section, '|') {
        let mut fields = entry.split(':');
        if let (Some(player_id), Some(name)) = (fields.next(), fields.next()) {
            if let Ok(player_id) = player_id.parse::<u64>() {
                creators.insert(player_id, name.to_string());
            }
        }
    }
    creators
}

/// Decode a level search page (`getGJLevels21`).
///
/// The response carries up to four `#`-separated sections: levels, creators,
/// songs, and the pagination trailer. Only the first and last matter here;
/// the creator section, when present, resolves creator names.
pub(crate) fn decode_search_page(body: &str) -> gd_format::Result<(Vec<GdLevel>, PageInfo)> {
    let sections: Vec<&str> = body.split('#').collect();

    let mut levels = split_entities(sections[0], '|')
        .into_iter()
        .map(decode_level)
        .collect::<gd_format::Result<Vec<_>>>()?;

    if let Some(creator_section) = sections.get(1) {
        let creators = parse_creators(creator_section);
        for level in &mut levels {
            level.creator_name = creators.get(&level.creator_player_id).cloned();
        }
    }

    let info = match sections.get(3) {
        Some(raw) => PageInfo::parse(raw)?,
        None => PageInfo::single_page(levels.len() as u32),
    };

    Ok((levels, info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE;
    use pretty_assertions::assert_eq;

    fn search_body() -> String {
        let description = URL_SAFE.encode("The hardest level");
        format!(
            "1:10565740:2:Bloodbath:3:{description}:6:37415:10:26672952:14:1505769:15:3:17:1:18:10:25:0|1:1:2:Tiny:6:999:15:0#37415:Riot:44|999:Nobody:0#songdata#9999:0:10"
        )
    }

    #[test]
    fn test_decode_search_page() {
        let (levels, info) = decode_search_page(&search_body()).unwrap();
        assert_eq!(levels.len(), 2);

        let bloodbath = &levels[0];
        assert_eq!(bloodbath.id, 10565740);
        assert_eq!(bloodbath.name, "Bloodbath");
        assert_eq!(bloodbath.description, "The hardest level");
        assert_eq!(bloodbath.creator_name.as_deref(), Some("Riot"));
        assert_eq!(bloodbath.length, LevelLength::Long);
        assert_eq!(bloodbath.stars, 10);
        assert!(bloodbath.is_demon);
        assert!(!bloodbath.is_auto);

        assert_eq!(levels[1].creator_name.as_deref(), Some("Nobody"));
        assert_eq!(info.total, 9999);
    }

    #[test]
    fn test_decode_level_without_optional_sections() {
        let (levels, info) = decode_search_page("1:42:2:plain").unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].name, "plain");
        assert_eq!(levels[0].creator_name, None);
        assert_eq!(levels[0].description, "");
        assert_eq!(info, PageInfo::single_page(1));
    }

    #[test]
    fn test_decode_level_requires_id() {
        let err = decode_search_page("2:no-id-here").unwrap_err();
        assert_eq!(err, gd_format::Error::MissingField { index: 1 });
    }

    #[test]
    fn test_length_mapping() {
        assert_eq!(LevelLength::from(0), LevelLength::Tiny);
        assert_eq!(LevelLength::from(4), LevelLength::ExtraLong);
        // Out-of-range values collapse to the smallest category.
        assert_eq!(LevelLength::from(99), LevelLength::Tiny);
    }
}
