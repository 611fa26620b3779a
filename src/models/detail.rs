//! Attribute, gift and note details of a contact.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// `YYYYMMDD`, the format of note ids.
pub const NOTE_ID_FORMAT: &str = "%Y%m%d";

static INVALID_GIFT_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9äöüÄÖÜß -]").expect("Invalid gift name regex"));

/// A key/value pair such as `phone = 0123`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A gift idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// Can be given more than once (flowers, wine).
    #[serde(default)]
    pub permanent: bool,
    #[serde(default)]
    pub gifted: bool,
    #[serde(default)]
    pub occasions: Vec<String>,
}

impl Gift {
    pub fn new(name: impl Into<String>) -> Result<Self, CommandError> {
        let name = name.into();
        Self::validate_name(&name)?;
        Ok(Self {
            name,
            desc: None,
            permanent: false,
            gifted: false,
            occasions: Vec::new(),
        })
    }

    /// Letters (including umlauts), digits, spaces and hyphens only.
    pub fn validate_name(name: &str) -> Result<(), CommandError> {
        if name.trim().is_empty() || INVALID_GIFT_CHARS.is_match(name) {
            return Err(CommandError::InvalidGiftName(name.to_string()));
        }
        Ok(())
    }

    /// Name with spaces replaced, as used for stable identifiers.
    pub fn id(&self) -> String {
        self.name.replace(' ', "_")
    }
}

/// A dated free-text note. The id is the date as `YYYYMMDD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub note_id: String,
    pub content: String,
}

impl Note {
    pub fn new(
        note_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, CommandError> {
        let note_id = note_id.into();
        Self::validate_id(&note_id)?;
        Ok(Self {
            note_id,
            content: content.into(),
        })
    }

    pub fn validate_id(note_id: &str) -> Result<NaiveDate, CommandError> {
        // chrono accepts "2024011" for %Y%m%d, so pin the width as well.
        if note_id.len() != 8 {
            return Err(CommandError::InvalidNoteId(note_id.to_string()));
        }
        NaiveDate::parse_from_str(note_id, NOTE_ID_FORMAT)
            .map_err(|_| CommandError::InvalidNoteId(note_id.to_string()))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.note_id, NOTE_ID_FORMAT).ok()
    }

    /// `DD-MM-YYYY`, shown in the details meta line.
    pub fn display_date(&self) -> String {
        match self.date() {
            Some(date) => date.format("%d-%m-%Y").to_string(),
            None => self.note_id.clone(),
        }
    }

    /// First line of the content, for list rendering.
    pub fn summary(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gift_name_validation() {
        assert!(Gift::new("Gift 1").is_ok());
        assert!(Gift::new("Bücher-Gutschein").is_ok());
        assert!(Gift::new("Straße").is_ok());
        assert_eq!(
            Gift::new("wine!"),
            Err(CommandError::InvalidGiftName("wine!".into()))
        );
        assert!(Gift::new("a_b").is_err());
        assert!(Gift::new("  ").is_err());
    }

    #[test]
    fn test_gift_id() {
        assert_eq!(Gift::new("Red wine").unwrap().id(), "Red_wine");
    }

    #[test]
    fn test_note_id_validation() {
        assert!(Note::new("19991215", "Text").is_ok());
        assert!(Note::new("1248", "Text").is_err());
        assert!(Note::new("19991315", "Text").is_err());
        assert!(Note::new("2024011", "Text").is_err());
        assert!(Note::new("abcdefgh", "Text").is_err());
    }

    #[test]
    fn test_note_display_date() {
        let note = Note::new("20240317", "met at the station\nsecond line").unwrap();
        assert_eq!(note.display_date(), "17-03-2024");
        assert_eq!(note.summary(), "met at the station");
    }

    #[test]
    fn test_attribute_ordering() {
        let mut attrs = vec![
            Attribute::new("phone", "2"),
            Attribute::new("mail", "x"),
            Attribute::new("phone", "1"),
        ];
        attrs.sort();
        assert_eq!(attrs[0].key, "mail");
        assert_eq!(attrs[1].value, "1");
    }
}
