//! Default keybindings for the application.
//!
//! These are used when no configuration file exists. A configuration file
//! replaces them entirely; it does not merge with them.

use super::bindings::{BindingTable, GLOBAL_CONTEXT};

/// Context names of the widget tree.
pub mod contexts {
    pub use crate::input::bindings::GLOBAL_CONTEXT as GLOBAL;

    pub const FRAME: &str = "frame";
    pub const CONTACT_LIST: &str = "contact_list";
    pub const CONTACT_ENTRY: &str = "contact_entry";
    pub const CONTACT_DETAILS: &str = "contact_details";
    pub const ATTRIBUTE_ENTRY: &str = "attribute_entry";
    pub const GIFT_ENTRY: &str = "gift_entry";
    pub const NOTE_ENTRY: &str = "note_entry";
}

/// Builds the default binding table.
pub fn default_bindings() -> BindingTable {
    let mut table = BindingTable::new();

    setup_global_bindings(&mut table);
    setup_list_bindings(&mut table);
    setup_details_bindings(&mut table);
    setup_entry_bindings(&mut table);

    table
}

fn setup_global_bindings(table: &mut BindingTable) {
    let bindings = [
        // Movement
        ("move_down", "t"),
        ("move_up", "r"),
        ("move_right", "n"),
        ("move_left", "d"),
        ("jump_to_first", "gg"),
        ("jump_to_last", "G"),
        // Application
        ("reload", "ctrl r"),
        ("quit", "q"),
        // Creation
        ("add_contact", "I"),
        ("add_attribute", "ii"),
        ("add_note", "in"),
    ];
    for (command, sequence) in bindings {
        table.register(GLOBAL_CONTEXT, sequence, command);
    }
}

fn setup_list_bindings(table: &mut BindingTable) {
    table.register(contexts::CONTACT_LIST, "/", "search_contact");
    table.register(contexts::CONTACT_LIST, "zz", "set_contact_filter");
    table.register(contexts::CONTACT_LIST, "Z", "clear_contact_filter");
}

fn setup_details_bindings(table: &mut BindingTable) {
    table.register(contexts::CONTACT_DETAILS, "ig", "add_gift");
}

fn setup_entry_bindings(table: &mut BindingTable) {
    // `d` is global (move_left) and globals win, so deletes use `D`.
    table.register(contexts::CONTACT_ENTRY, "cw", "rename_contact");
    table.register(contexts::CONTACT_ENTRY, "D", "delete_contact");

    table.register(contexts::ATTRIBUTE_ENTRY, "cw", "edit_attribute");
    table.register(contexts::ATTRIBUTE_ENTRY, "D", "delete_attribute");
    table.register(contexts::ATTRIBUTE_ENTRY, "yy", "copy_attribute");

    table.register(contexts::GIFT_ENTRY, "cw", "rename_gift");
    table.register(contexts::GIFT_ENTRY, "D", "delete_gift");
    table.register(contexts::GIFT_ENTRY, "x", "mark_gifted");

    table.register(contexts::NOTE_ENTRY, "e", "edit_note");
    table.register(contexts::NOTE_ENTRY, "cw", "rename_note");
    table.register(contexts::NOTE_ENTRY, "D", "delete_note");
}

/// Renders a table in the configuration file format, one
/// `[keybindings.<context>]` section per context.
pub fn render_ini(table: &BindingTable) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;

    for (context, sequence, command) in table.entries() {
        if current != Some(context) {
            if current.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("[keybindings.{}]\n", context));
            current = Some(context);
        }
        out.push_str(&format!("{} = {}\n", command, sequence));
    }

    out
}
