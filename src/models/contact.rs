use serde::{Deserialize, Serialize};

use super::detail::{Attribute, Gift, Note};
use crate::error::CommandError;

/// A contact with its details. Details are kept sorted: attributes by
/// key then value, gifts by name, notes by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub gifts: Vec<Gift>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        let _ = self.add_attribute(Attribute::new(key, value));
        self
    }

    pub fn with_gift(mut self, gift: Gift) -> Self {
        let _ = self.add_gift(gift);
        self
    }

    pub fn with_note(mut self, note: Note) -> Self {
        let _ = self.add_note(note);
        self
    }

    /// Number of detail rows shown in the details pane.
    pub fn detail_count(&self) -> usize {
        self.attributes.len() + self.gifts.len() + self.notes.len()
    }

    pub fn has_details(&self) -> bool {
        self.detail_count() > 0
    }

    // attributes

    pub fn add_attribute(&mut self, attribute: Attribute) -> Result<(), CommandError> {
        if self.attributes.contains(&attribute) {
            return Err(CommandError::DetailExists {
                kind: "attribute",
                name: attribute.key,
            });
        }
        self.attributes.push(attribute);
        self.attributes.sort();
        Ok(())
    }

    pub fn replace_attribute(
        &mut self,
        old: &Attribute,
        new: Attribute,
    ) -> Result<(), CommandError> {
        let index = self.attribute_index(old)?;
        self.attributes[index] = new;
        self.attributes.sort();
        Ok(())
    }

    pub fn remove_attribute(&mut self, attribute: &Attribute) -> Result<Attribute, CommandError> {
        let index = self.attribute_index(attribute)?;
        Ok(self.attributes.remove(index))
    }

    fn attribute_index(&self, attribute: &Attribute) -> Result<usize, CommandError> {
        self.attributes
            .iter()
            .position(|a| a == attribute)
            .ok_or_else(|| CommandError::DetailNotFound {
                kind: "attribute",
                name: attribute.key.clone(),
            })
    }

    // gifts

    pub fn gift(&self, name: &str) -> Option<&Gift> {
        self.gifts.iter().find(|g| g.name == name)
    }

    pub fn gift_mut(&mut self, name: &str) -> Result<&mut Gift, CommandError> {
        self.gifts
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| CommandError::DetailNotFound {
                kind: "gift",
                name: name.to_string(),
            })
    }

    pub fn add_gift(&mut self, gift: Gift) -> Result<(), CommandError> {
        if self.gift(&gift.name).is_some() {
            return Err(CommandError::DetailExists {
                kind: "gift",
                name: gift.name,
            });
        }
        self.gifts.push(gift);
        self.gifts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(())
    }

    pub fn rename_gift(&mut self, name: &str, new_name: &str) -> Result<(), CommandError> {
        Gift::validate_name(new_name)?;
        if name != new_name && self.gift(new_name).is_some() {
            return Err(CommandError::DetailExists {
                kind: "gift",
                name: new_name.to_string(),
            });
        }
        self.gift_mut(name)?.name = new_name.to_string();
        self.gifts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(())
    }

    pub fn remove_gift(&mut self, name: &str) -> Result<Gift, CommandError> {
        let index = self
            .gifts
            .iter()
            .position(|g| g.name == name)
            .ok_or_else(|| CommandError::DetailNotFound {
                kind: "gift",
                name: name.to_string(),
            })?;
        Ok(self.gifts.remove(index))
    }

    // notes

    pub fn note(&self, note_id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.note_id == note_id)
    }

    pub fn add_note(&mut self, note: Note) -> Result<(), CommandError> {
        if self.note(&note.note_id).is_some() {
            return Err(CommandError::DetailExists {
                kind: "note",
                name: note.note_id,
            });
        }
        self.notes.push(note);
        self.notes.sort_by(|a, b| a.note_id.cmp(&b.note_id));
        Ok(())
    }

    pub fn edit_note(&mut self, note_id: &str, content: &str) -> Result<(), CommandError> {
        let note = self.note_mut(note_id)?;
        note.content = content.to_string();
        Ok(())
    }

    pub fn rename_note(&mut self, note_id: &str, new_id: &str) -> Result<(), CommandError> {
        Note::validate_id(new_id)?;
        if note_id != new_id && self.note(new_id).is_some() {
            return Err(CommandError::DetailExists {
                kind: "note",
                name: new_id.to_string(),
            });
        }
        self.note_mut(note_id)?.note_id = new_id.to_string();
        self.notes.sort_by(|a, b| a.note_id.cmp(&b.note_id));
        Ok(())
    }

    pub fn remove_note(&mut self, note_id: &str) -> Result<Note, CommandError> {
        let index = self
            .notes
            .iter()
            .position(|n| n.note_id == note_id)
            .ok_or_else(|| CommandError::DetailNotFound {
                kind: "note",
                name: note_id.to_string(),
            })?;
        Ok(self.notes.remove(index))
    }

    fn note_mut(&mut self, note_id: &str) -> Result<&mut Note, CommandError> {
        self.notes
            .iter_mut()
            .find(|n| n.note_id == note_id)
            .ok_or_else(|| CommandError::DetailNotFound {
                kind: "note",
                name: note_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Contact {
        Contact::new("Test Contact")
    }

    #[test]
    fn test_add_attribute_twice_is_rejected() {
        let mut c = contact();
        let attr = Attribute::new("key1", "Attribute 1");
        c.add_attribute(attr.clone()).unwrap();
        assert!(c.add_attribute(attr).is_err());
        assert_eq!(c.attributes.len(), 1);
    }

    #[test]
    fn test_replace_attribute() {
        let mut c = contact();
        let a1 = Attribute::new("key1", "Attribute 1");
        let a2 = Attribute::new("key2", "Attribute 2");
        c.add_attribute(a1.clone()).unwrap();
        c.replace_attribute(&a1, a2.clone()).unwrap();
        assert_eq!(c.attributes, vec![a2]);
        assert!(c.remove_attribute(&a1).is_err());
    }

    #[test]
    fn test_gifts_stay_sorted_and_rename() {
        let mut c = contact();
        c.add_gift(Gift::new("Wine").unwrap()).unwrap();
        c.add_gift(Gift::new("Book").unwrap()).unwrap();
        assert_eq!(c.gifts[0].name, "Book");

        c.rename_gift("Book", "Zebra").unwrap();
        assert_eq!(c.gifts[1].name, "Zebra");
        assert!(c.rename_gift("Wine", "Zebra").is_err());
        assert!(c.rename_gift("Wine", "bad!").is_err());
    }

    #[test]
    fn test_notes() {
        let mut c = contact();
        c.add_note(Note::new("19991215", "Text 2").unwrap()).unwrap();
        c.add_note(Note::new("19990101", "Text 1").unwrap()).unwrap();
        assert_eq!(c.notes[0].note_id, "19990101");

        c.edit_note("19990101", "changed").unwrap();
        assert_eq!(c.note("19990101").map(|n| n.content.as_str()), Some("changed"));

        assert!(c.rename_note("19990101", "1248").is_err());
        c.rename_note("19990101", "20000101").unwrap();
        assert_eq!(c.notes[1].note_id, "20000101");

        c.remove_note("20000101").unwrap();
        assert_eq!(c.detail_count(), 1);
    }
}
