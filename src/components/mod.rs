//! Widget tree.
//!
//! ```text
//! ContactFrame (frame, root)
//! ├── ContactList (contact_list)
//! │   └── ContactEntry (contact_entry) × n
//! └── ContactDetails (contact_details)
//!     └── AttributeEntry | GiftEntry | NoteEntry × n
//! Console (outside the tree, bypasses the dispatch engine)
//! ```
//!
//! Every node except the console implements
//! [`Dispatchable`](crate::input::Dispatchable) with [`AppAction`] as its
//! side effect type.

pub mod action;
pub mod console;
pub mod contact_details;
pub mod contact_entry;
pub mod contact_list;
pub mod cursor;
pub mod detail_entry;
pub mod frame;

pub use action::AppAction;
pub use console::{Console, ConsoleEvent, ConsoleMode};
pub use contact_details::ContactDetails;
pub use contact_entry::ContactEntry;
pub use contact_list::ContactList;
pub use cursor::ListCursor;
pub use detail_entry::{AttributeEntry, DetailEntry, GiftEntry, NoteEntry};
pub use frame::{ContactFrame, Pane};
