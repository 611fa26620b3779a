//! Console command definitions, parsing and execution.

use crate::error::CommandError;
use crate::models::Attribute;
use crate::repository::ContactRepository;

/// The detail row focused in the details pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusedDetail {
    Attribute(Attribute),
    Gift(String),
    Note(String),
}

/// What the commands act on: the list cursor and the details cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection<'a> {
    pub contact: Option<&'a str>,
    pub detail: Option<&'a FocusedDetail>,
}

impl<'a> Selection<'a> {
    fn contact(&self) -> Result<&'a str, CommandError> {
        self.contact.ok_or(CommandError::NoContactSelected)
    }

    fn attribute(&self) -> Result<&'a Attribute, CommandError> {
        match self.detail {
            Some(FocusedDetail::Attribute(attribute)) => Ok(attribute),
            _ => Err(CommandError::NoDetailSelected("attribute")),
        }
    }

    fn gift(&self) -> Result<&'a str, CommandError> {
        match self.detail {
            Some(FocusedDetail::Gift(name)) => Ok(name),
            _ => Err(CommandError::NoDetailSelected("gift")),
        }
    }

    fn note(&self) -> Result<&'a str, CommandError> {
        match self.detail {
            Some(FocusedDetail::Note(id)) => Ok(id),
            _ => Err(CommandError::NoDetailSelected("note")),
        }
    }
}

/// Where the cursor should go after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    Contact(String),
    Detail(FocusedDetail),
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    /// Status line text.
    pub message: String,
    pub focus: Option<Focus>,
    pub quit: bool,
}

impl CommandOutcome {
    fn message(message: String) -> Self {
        Self {
            message,
            ..Default::default()
        }
    }

    fn focus(mut self, focus: Focus) -> Self {
        self.focus = Some(focus);
        self
    }
}

/// Every command the console understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    AddContact,
    RenameContact,
    DeleteContact,
    AddAttribute,
    EditAttribute,
    DeleteAttribute,
    AddGift,
    RenameGift,
    DeleteGift,
    MarkGifted,
    UnmarkGifted,
    MarkPermanent,
    UnmarkPermanent,
    AddNote,
    EditNote,
    RenameNote,
    DeleteNote,
    Quit,
}

impl ConsoleCommand {
    pub fn all() -> Vec<Self> {
        vec![
            ConsoleCommand::AddContact,
            ConsoleCommand::RenameContact,
            ConsoleCommand::DeleteContact,
            ConsoleCommand::AddAttribute,
            ConsoleCommand::EditAttribute,
            ConsoleCommand::DeleteAttribute,
            ConsoleCommand::AddGift,
            ConsoleCommand::RenameGift,
            ConsoleCommand::DeleteGift,
            ConsoleCommand::MarkGifted,
            ConsoleCommand::UnmarkGifted,
            ConsoleCommand::MarkPermanent,
            ConsoleCommand::UnmarkPermanent,
            ConsoleCommand::AddNote,
            ConsoleCommand::EditNote,
            ConsoleCommand::RenameNote,
            ConsoleCommand::DeleteNote,
            ConsoleCommand::Quit,
        ]
    }

    /// Parses the command word (the first word of a console line).
    pub fn parse(word: &str) -> Option<Self> {
        let word = word.trim();
        Self::all()
            .into_iter()
            .find(|cmd| cmd.aliases().contains(&word))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConsoleCommand::AddContact => "add-contact",
            ConsoleCommand::RenameContact => "rename-contact",
            ConsoleCommand::DeleteContact => "delete-contact",
            ConsoleCommand::AddAttribute => "add-attribute",
            ConsoleCommand::EditAttribute => "edit-attribute",
            ConsoleCommand::DeleteAttribute => "delete-attribute",
            ConsoleCommand::AddGift => "add-gift",
            ConsoleCommand::RenameGift => "rename-gift",
            ConsoleCommand::DeleteGift => "delete-gift",
            ConsoleCommand::MarkGifted => "mark-gifted",
            ConsoleCommand::UnmarkGifted => "unmark-gifted",
            ConsoleCommand::MarkPermanent => "mark-permanent",
            ConsoleCommand::UnmarkPermanent => "unmark-permanent",
            ConsoleCommand::AddNote => "add-note",
            ConsoleCommand::EditNote => "edit-note",
            ConsoleCommand::RenameNote => "rename-note",
            ConsoleCommand::DeleteNote => "delete-note",
            ConsoleCommand::Quit => "quit",
        }
    }

    /// All words that invoke this command, primary name first.
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            ConsoleCommand::Quit => vec!["quit", "q"],
            other => vec![other.name()],
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            ConsoleCommand::AddContact => "add-contact NAME",
            ConsoleCommand::RenameContact => "rename-contact NEW_NAME",
            ConsoleCommand::DeleteContact => "delete-contact NAME",
            ConsoleCommand::AddAttribute => "add-attribute KEY VALUE",
            ConsoleCommand::EditAttribute => "edit-attribute KEY VALUE",
            ConsoleCommand::DeleteAttribute => "delete-attribute KEY VALUE",
            ConsoleCommand::AddGift => "add-gift NAME",
            ConsoleCommand::RenameGift => "rename-gift NEW_NAME",
            ConsoleCommand::DeleteGift => "delete-gift NAME",
            ConsoleCommand::MarkGifted => "mark-gifted NAME",
            ConsoleCommand::UnmarkGifted => "unmark-gifted NAME",
            ConsoleCommand::MarkPermanent => "mark-permanent NAME",
            ConsoleCommand::UnmarkPermanent => "unmark-permanent NAME",
            ConsoleCommand::AddNote => "add-note YYYYMMDD TEXT",
            ConsoleCommand::EditNote => "edit-note YYYYMMDD TEXT",
            ConsoleCommand::RenameNote => "rename-note YYYYMMDD",
            ConsoleCommand::DeleteNote => "delete-note YYYYMMDD",
            ConsoleCommand::Quit => "quit",
        }
    }

    /// Completes `prefix` to a command name if exactly one name starts
    /// with it.
    pub fn complete(prefix: &str) -> Option<&'static str> {
        if prefix.is_empty() {
            return None;
        }
        let mut matches = Self::all()
            .into_iter()
            .map(|cmd| cmd.name())
            .filter(|name| name.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(name), None) => Some(name),
            _ => None,
        }
    }

    pub fn execute(
        self,
        args: &[&str],
        repo: &mut ContactRepository,
        selection: &Selection<'_>,
    ) -> Result<CommandOutcome, CommandError> {
        let rest = args.join(" ");

        match self {
            ConsoleCommand::AddContact => {
                let name = self.required(&rest, "NAME")?;
                let msg = repo.add(name)?;
                Ok(CommandOutcome::message(msg).focus(Focus::Contact(name.to_string())))
            }
            ConsoleCommand::RenameContact => {
                let new_name = self.required(&rest, "NEW_NAME")?;
                let msg = repo.rename(selection.contact()?, new_name)?;
                Ok(CommandOutcome::message(msg).focus(Focus::Contact(new_name.to_string())))
            }
            ConsoleCommand::DeleteContact => {
                let name = self.required(&rest, "NAME")?;
                Ok(CommandOutcome::message(repo.delete(name)?))
            }
            ConsoleCommand::AddAttribute => {
                let attribute = self.attribute(args)?;
                let msg = repo.add_attribute(selection.contact()?, attribute.clone())?;
                let focus = Focus::Detail(FocusedDetail::Attribute(attribute));
                Ok(CommandOutcome::message(msg).focus(focus))
            }
            ConsoleCommand::EditAttribute => {
                let attribute = self.attribute(args)?;
                let msg = repo.edit_attribute(
                    selection.contact()?,
                    selection.attribute()?,
                    attribute.clone(),
                )?;
                let focus = Focus::Detail(FocusedDetail::Attribute(attribute));
                Ok(CommandOutcome::message(msg).focus(focus))
            }
            ConsoleCommand::DeleteAttribute => {
                let attribute = self.attribute(args)?;
                let msg = repo.delete_attribute(selection.contact()?, &attribute)?;
                Ok(CommandOutcome::message(msg))
            }
            ConsoleCommand::AddGift => {
                let name = self.required(&rest, "NAME")?;
                let msg = repo.add_gift(selection.contact()?, name)?;
                let focus = Focus::Detail(FocusedDetail::Gift(name.to_string()));
                Ok(CommandOutcome::message(msg).focus(focus))
            }
            ConsoleCommand::RenameGift => {
                let new_name = self.required(&rest, "NEW_NAME")?;
                let msg = repo.rename_gift(selection.contact()?, selection.gift()?, new_name)?;
                let focus = Focus::Detail(FocusedDetail::Gift(new_name.to_string()));
                Ok(CommandOutcome::message(msg).focus(focus))
            }
            ConsoleCommand::DeleteGift => {
                let name = self.required(&rest, "NAME")?;
                Ok(CommandOutcome::message(repo.delete_gift(selection.contact()?, name)?))
            }
            ConsoleCommand::MarkGifted | ConsoleCommand::UnmarkGifted => {
                let name = self.required(&rest, "NAME")?;
                let gifted = self == ConsoleCommand::MarkGifted;
                let msg = repo.set_gifted(selection.contact()?, name, gifted)?;
                let focus = Focus::Detail(FocusedDetail::Gift(name.to_string()));
                Ok(CommandOutcome::message(msg).focus(focus))
            }
            ConsoleCommand::MarkPermanent | ConsoleCommand::UnmarkPermanent => {
                let name = self.required(&rest, "NAME")?;
                let permanent = self == ConsoleCommand::MarkPermanent;
                let msg = repo.set_permanent(selection.contact()?, name, permanent)?;
                let focus = Focus::Detail(FocusedDetail::Gift(name.to_string()));
                Ok(CommandOutcome::message(msg).focus(focus))
            }
            ConsoleCommand::AddNote | ConsoleCommand::EditNote => {
                let (note_id, content) = match args.split_first() {
                    Some((id, text)) => (*id, text.join(" ")),
                    None => return Err(self.missing("YYYYMMDD")),
                };
                let contact = selection.contact()?;
                let msg = if self == ConsoleCommand::AddNote {
                    repo.add_note(contact, note_id, &content)?
                } else {
                    repo.edit_note(contact, note_id, &content)?
                };
                let focus = Focus::Detail(FocusedDetail::Note(note_id.to_string()));
                Ok(CommandOutcome::message(msg).focus(focus))
            }
            ConsoleCommand::RenameNote => {
                let new_id = self.required(&rest, "YYYYMMDD")?;
                let msg = repo.rename_note(selection.contact()?, selection.note()?, new_id)?;
                let focus = Focus::Detail(FocusedDetail::Note(new_id.to_string()));
                Ok(CommandOutcome::message(msg).focus(focus))
            }
            ConsoleCommand::DeleteNote => {
                let note_id = self.required(&rest, "YYYYMMDD")?;
                Ok(CommandOutcome::message(repo.delete_note(selection.contact()?, note_id)?))
            }
            ConsoleCommand::Quit => Ok(CommandOutcome {
                quit: true,
                ..Default::default()
            }),
        }
    }

    fn missing(&self, argument: &'static str) -> CommandError {
        CommandError::MissingArgument {
            command: self.name(),
            argument,
        }
    }

    fn required<'s>(
        &self,
        value: &'s str,
        argument: &'static str,
    ) -> Result<&'s str, CommandError> {
        if value.is_empty() {
            Err(self.missing(argument))
        } else {
            Ok(value)
        }
    }

    fn attribute(&self, args: &[&str]) -> Result<Attribute, CommandError> {
        match args {
            [] => Err(self.missing("KEY")),
            [_] => Err(self.missing("VALUE")),
            [key, value @ ..] => Ok(Attribute::new(*key, value.join(" "))),
        }
    }
}

/// Parses and executes one console line.
pub fn run(
    line: &str,
    repo: &mut ContactRepository,
    selection: &Selection<'_>,
) -> Result<CommandOutcome, CommandError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(CommandOutcome::default());
    };
    let command =
        ConsoleCommand::parse(word).ok_or_else(|| CommandError::Unknown(word.to_string()))?;
    let args: Vec<&str> = words.collect();

    tracing::info!("console: {} {:?}", command.name(), args);
    command.execute(&args, repo, selection)
}
