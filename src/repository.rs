//! In-memory contact store.
//!
//! Contacts are keyed and ordered by name. The store is the only owner of
//! contact data; widgets hold names and indices into it, never copies they
//! mutate.

use std::collections::BTreeMap;

use crate::error::CommandError;
use crate::models::{Attribute, Contact, Gift, Note};

#[derive(Debug, Clone, Default)]
pub struct ContactRepository {
    contacts: BTreeMap<String, Contact>,
}

impl ContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        Self {
            contacts: contacts
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
        }
    }

    /// A handful of contacts to start the application with.
    pub fn sample() -> Self {
        let note = |id: &str, text: &str| Note::new(id, text).ok();
        let gift = |name: &str| Gift::new(name).ok();

        let mut alice = Contact::new("Alice Smith")
            .with_attribute("phone", "+49 30 1234567")
            .with_attribute("mail", "alice@example.org");
        alice.gifts.extend(gift("Board game"));
        alice.gifts.extend(gift("Red wine"));
        alice.notes.extend(note("20240317", "Met at the station.\nShe moved to Berlin."));

        let mut bob = Contact::new("Bob Jones").with_attribute("birthday", "1985-06-02");
        bob.gifts.extend(gift("Climbing shoes"));

        let mut carla = Contact::new("Carla Müller").with_attribute("mail", "carla@example.org");
        carla.notes.extend(note("20231224", "Christmas dinner."));
        carla.notes.extend(note("20240101", "New year call."));

        Self::with_contacts([alice, bob, carla, Contact::new("Dave")])
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    pub fn names(&self) -> Vec<String> {
        self.contacts.keys().cloned().collect()
    }

    /// Names containing `filter` (case-insensitive). An empty filter
    /// matches everything.
    pub fn filtered_names(&self, filter: &str) -> Vec<String> {
        let needle = filter.to_lowercase();
        self.contacts
            .keys()
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// First name starting with `query`, else the first containing it
    /// (case-insensitive).
    pub fn search(&self, query: &str) -> Option<&str> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return None;
        }
        let names = || self.contacts.keys().map(String::as_str);
        names()
            .find(|name| name.to_lowercase().starts_with(&needle))
            .or_else(|| names().find(|name| name.to_lowercase().contains(&needle)))
    }

    pub fn add(&mut self, name: &str) -> Result<String, CommandError> {
        if self.contains(name) {
            return Err(CommandError::ContactExists(name.to_string()));
        }
        self.contacts.insert(name.to_string(), Contact::new(name));
        tracing::info!("contact added: {}", name);
        Ok(format!("{} added.", name))
    }

    pub fn rename(&mut self, name: &str, new_name: &str) -> Result<String, CommandError> {
        if !self.contains(name) {
            return Err(CommandError::ContactNotFound(name.to_string()));
        }
        if name == new_name {
            return Ok("Warning: Name unchanged.".to_string());
        }
        if self.contains(new_name) {
            return Err(CommandError::ContactExists(new_name.to_string()));
        }
        if let Some(mut contact) = self.contacts.remove(name) {
            contact.name = new_name.to_string();
            self.contacts.insert(new_name.to_string(), contact);
        }
        tracing::info!("contact renamed: {} -> {}", name, new_name);
        Ok(format!("{} renamed to {}.", name, new_name))
    }

    pub fn delete(&mut self, name: &str) -> Result<String, CommandError> {
        self.contacts
            .remove(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        tracing::info!("contact deleted: {}", name);
        Ok(format!("{} deleted.", name))
    }

    fn contact_mut(&mut self, name: &str) -> Result<&mut Contact, CommandError> {
        self.contacts
            .get_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    // details

    pub fn add_attribute(
        &mut self,
        contact: &str,
        attribute: Attribute,
    ) -> Result<String, CommandError> {
        let msg = format!("{} added to {}.", attribute.key, contact);
        self.contact_mut(contact)?.add_attribute(attribute)?;
        Ok(msg)
    }

    pub fn edit_attribute(
        &mut self,
        contact: &str,
        old: &Attribute,
        new: Attribute,
    ) -> Result<String, CommandError> {
        let msg = format!("{} of {} changed.", old.key, contact);
        self.contact_mut(contact)?.replace_attribute(old, new)?;
        Ok(msg)
    }

    pub fn delete_attribute(
        &mut self,
        contact: &str,
        attribute: &Attribute,
    ) -> Result<String, CommandError> {
        self.contact_mut(contact)?.remove_attribute(attribute)?;
        Ok(format!("{} removed from {}.", attribute.key, contact))
    }

    pub fn add_gift(&mut self, contact: &str, name: &str) -> Result<String, CommandError> {
        let gift = Gift::new(name)?;
        self.contact_mut(contact)?.add_gift(gift)?;
        Ok(format!("Gift {} added to {}.", name, contact))
    }

    pub fn rename_gift(
        &mut self,
        contact: &str,
        name: &str,
        new_name: &str,
    ) -> Result<String, CommandError> {
        if name == new_name {
            return Ok("Warning: Name unchanged.".to_string());
        }
        self.contact_mut(contact)?.rename_gift(name, new_name)?;
        Ok(format!("Gift {} renamed to {}.", name, new_name))
    }

    pub fn delete_gift(&mut self, contact: &str, name: &str) -> Result<String, CommandError> {
        self.contact_mut(contact)?.remove_gift(name)?;
        Ok(format!("Gift {} deleted.", name))
    }

    pub fn set_gifted(
        &mut self,
        contact: &str,
        name: &str,
        gifted: bool,
    ) -> Result<String, CommandError> {
        self.contact_mut(contact)?.gift_mut(name)?.gifted = gifted;
        Ok(if gifted {
            format!("{} marked as gifted.", name)
        } else {
            format!("{} unmarked as gifted.", name)
        })
    }

    pub fn set_permanent(
        &mut self,
        contact: &str,
        name: &str,
        permanent: bool,
    ) -> Result<String, CommandError> {
        self.contact_mut(contact)?.gift_mut(name)?.permanent = permanent;
        Ok(if permanent {
            format!("{} marked as permanent.", name)
        } else {
            format!("{} unmarked as permanent.", name)
        })
    }

    pub fn add_note(
        &mut self,
        contact: &str,
        note_id: &str,
        content: &str,
    ) -> Result<String, CommandError> {
        let note = Note::new(note_id, content)?;
        self.contact_mut(contact)?.add_note(note)?;
        Ok(format!("Note {} added to {}.", note_id, contact))
    }

    pub fn edit_note(
        &mut self,
        contact: &str,
        note_id: &str,
        content: &str,
    ) -> Result<String, CommandError> {
        Note::validate_id(note_id)?;
        self.contact_mut(contact)?.edit_note(note_id, content)?;
        Ok(format!("Note {} changed.", note_id))
    }

    pub fn rename_note(
        &mut self,
        contact: &str,
        note_id: &str,
        new_id: &str,
    ) -> Result<String, CommandError> {
        if note_id == new_id {
            return Ok("Warning: Name unchanged.".to_string());
        }
        self.contact_mut(contact)?.rename_note(note_id, new_id)?;
        Ok(format!("Note {} renamed to {}.", note_id, new_id))
    }

    pub fn delete_note(&mut self, contact: &str, note_id: &str) -> Result<String, CommandError> {
        self.contact_mut(contact)?.remove_note(note_id)?;
        Ok(format!("Note {} deleted.", note_id))
    }
}
