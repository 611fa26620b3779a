/// Side effects requested by widgets during a keypress.
///
/// Widgets never touch the repository or the console directly; the app
/// applies these once the key has travelled through the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Reload,
    /// Open the `:` line with the given text already typed.
    OpenConsole { prefill: String },
    OpenSearch,
    OpenFilter,
    ClearFilter,
    /// The list cursor moved onto this contact.
    SelectContact(String),
    CopyToClipboard(String),
    /// Execute a console line without showing the console.
    RunConsoleCommand(String),
}

impl AppAction {
    pub fn console(prefill: impl Into<String>) -> Self {
        AppAction::OpenConsole {
            prefill: prefill.into(),
        }
    }
}
