//! Context-scoped binding table.
//!
//! Maps `(context, key sequence)` to a command identifier. The table is
//! built once at startup and only read afterwards.

use std::collections::HashMap;
use std::fmt;

/// Name of the fallback scope consulted for every node.
pub const GLOBAL_CONTEXT: &str = "global";

/// Identifier of a bound command. Only the node owning a handler for it
/// gives it meaning.
pub type CommandId = String;

/// Recorded when a registration replaced an existing binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingWarning {
    pub context: String,
    pub sequence: String,
    pub previous: CommandId,
    pub replacement: CommandId,
}

impl fmt::Display for BindingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] '{}' rebound from {} to {}",
            self.context, self.sequence, self.previous, self.replacement
        )
    }
}

/// Registry of key sequences per context.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    contexts: HashMap<String, HashMap<String, CommandId>>,
    warnings: Vec<BindingWarning>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `sequence` to `command` in `context`.
    ///
    /// An existing binding for the same sequence is overwritten; the
    /// overwrite is logged and kept in [`warnings`](Self::warnings).
    pub fn register(
        &mut self,
        context: impl Into<String>,
        sequence: impl Into<String>,
        command: impl Into<CommandId>,
    ) {
        let context = context.into();
        let sequence = sequence.into();
        let command = command.into();

        let scope = self.contexts.entry(context.clone()).or_default();
        if let Some(previous) = scope.insert(sequence.clone(), command.clone()) {
            let warning = BindingWarning {
                context,
                sequence,
                previous,
                replacement: command,
            };
            tracing::warn!("Duplicate keybinding: {}", warning);
            self.warnings.push(warning);
        }
    }

    /// Returns the command bound to `sequence` in the first of `contexts`
    /// that has it. Contexts are evaluated in the order given.
    pub fn lookup(&self, sequence: &str, contexts: &[&str]) -> Option<&CommandId> {
        contexts
            .iter()
            .filter_map(|context| self.contexts.get(*context))
            .find_map(|scope| scope.get(sequence))
    }

    /// True if any context binds a strictly longer sequence starting with
    /// `sequence`.
    pub fn is_prefix(&self, sequence: &str) -> bool {
        self.contexts.values().any(|scope| {
            scope
                .keys()
                .any(|bound| bound.len() > sequence.len() && bound.starts_with(sequence))
        })
    }

    /// All bindings as `(context, sequence, command)`, sorted for display.
    pub fn entries(&self) -> Vec<(&str, &str, &str)> {
        let mut entries: Vec<_> = self
            .contexts
            .iter()
            .flat_map(|(context, scope)| {
                scope
                    .iter()
                    .map(move |(seq, cmd)| (context.as_str(), seq.as_str(), cmd.as_str()))
            })
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn warnings(&self) -> &[BindingWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.contexts.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
