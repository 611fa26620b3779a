//! Domain value types: contacts and their details.

mod contact;
mod detail;

pub use contact::Contact;
pub use detail::{Attribute, Gift, Note, NOTE_ID_FORMAT};
