//! Player badge wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Badge lifetime category.
///
/// Decoding is case-insensitive and lenient: the API may grow new
/// categories, and an unrecognized value must not fail the whole badge,
/// so anything unknown decodes as [`BadgeKind::Permanent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    Temporary,
    Event,
    Permanent,
}

impl BadgeKind {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temporary => "temporary",
            Self::Event => "event",
            Self::Permanent => "permanent",
        }
    }
}

impl Serialize for BadgeKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BadgeKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.to_ascii_lowercase().as_str() {
            "temporary" => Self::Temporary,
            "event" => Self::Event,
            _ => Self::Permanent,
        })
    }
}

/// A player's selected badge.
///
/// Immutable once decoded; carries no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub badge_type: BadgeKind,
    /// Hex-encoded Unicode codepoint (e.g. "E000") used as the chat glyph.
    #[serde(default)]
    pub unicode_char: String,
    pub created_at: DateTime<Utc>,
}

impl Badge {
    /// Decodes `unicode_char` into a displayable one-codepoint string.
    ///
    /// An empty, unparsable, or out-of-range codepoint yields an empty
    /// string rather than an error: a badge with a broken glyph still
    /// renders, just without the icon.
    pub fn glyph(&self) -> String {
        if self.unicode_char.is_empty() {
            return String::new();
        }
        u32::from_str_radix(&self.unicode_char, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge_json(badge_type: &str, unicode_char: &str) -> String {
        format!(
            r#"{{
                "id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
                "name": "Veteran",
                "description": "One year on the server",
                "image_url": "https://cdn.example/badges/veteran.png",
                "badge_type": "{badge_type}",
                "unicode_char": "{unicode_char}",
                "created_at": "2024-03-01T12:00:00Z"
            }}"#
        )
    }

    #[test]
    fn decodes_known_badge_type() {
        let badge: Badge = serde_json::from_str(&badge_json("event", "E000")).unwrap();
        assert_eq!(badge.badge_type, BadgeKind::Event);
        assert_eq!(badge.name, "Veteran");
    }

    #[test]
    fn badge_type_decode_is_case_insensitive() {
        let badge: Badge = serde_json::from_str(&badge_json("TEMPORARY", "E000")).unwrap();
        assert_eq!(badge.badge_type, BadgeKind::Temporary);
    }

    #[test]
    fn unknown_badge_type_defaults_to_permanent() {
        let badge: Badge = serde_json::from_str(&badge_json("seasonal", "E000")).unwrap();
        assert_eq!(badge.badge_type, BadgeKind::Permanent);
    }

    #[test]
    fn glyph_decodes_hex_codepoint() {
        let badge: Badge = serde_json::from_str(&badge_json("permanent", "E000")).unwrap();
        assert_eq!(badge.glyph(), "\u{e000}");
    }

    #[test]
    fn glyph_is_empty_for_empty_codepoint() {
        let badge: Badge = serde_json::from_str(&badge_json("permanent", "")).unwrap();
        assert_eq!(badge.glyph(), "");
    }

    #[test]
    fn glyph_is_empty_for_unparsable_codepoint() {
        let badge: Badge = serde_json::from_str(&badge_json("permanent", "not-hex")).unwrap();
        assert_eq!(badge.glyph(), "");
    }

    #[test]
    fn glyph_is_empty_for_surrogate_codepoint() {
        // D800 is a UTF-16 surrogate, not a valid char.
        let badge: Badge = serde_json::from_str(&badge_json("permanent", "D800")).unwrap();
        assert_eq!(badge.glyph(), "");
    }

    #[test]
    fn missing_optional_fields_do_not_fail_decode() {
        let badge: Badge = serde_json::from_str(
            r#"{
                "id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
                "name": "Bare",
                "badge_type": "permanent",
                "created_at": "2024-03-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(badge.description, "");
        assert_eq!(badge.glyph(), "");
    }

    #[test]
    fn badge_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BadgeKind::Event).unwrap(),
            "\"event\""
        );
    }
}
