//! The dispatch engine.
//!
//! [`DispatchEngine`] owns the binding table and the single mutable
//! [`DispatchState`] shared by every node of the widget tree. Nodes call
//! [`resolve`](DispatchEngine::resolve) leaf-first; a key that a child
//! could not resolve is retried by each ancestor under its own context
//! until the root either resolves it or abandons the sequence.
//!
//! ```text
//!   IDLE ──key──▶ ACCUMULATING ──bound──▶ RESOLVED ──▶ IDLE
//!                      │  ▲
//!                      │  └──prefix──┘
//!                      └──no extension at root──▶ ABANDONED ──▶ IDLE
//! ```

use super::bindings::{BindingTable, CommandId, GLOBAL_CONTEXT};
use super::key::KeyToken;
use super::sequence::KeySequenceAccumulator;

/// Mutable dispatch record for one interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchState {
    pub pending: KeySequenceAccumulator,
    pub is_bubbling: bool,
    pub is_simulating: bool,
}

impl DispatchState {
    /// True when nothing is accumulated and no key is travelling upward.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && !self.is_bubbling
    }

    pub fn pending_keys(&self) -> &str {
        self.pending.signature()
    }

    pub fn repeat(&self) -> u32 {
        self.pending.repeat()
    }
}

/// Resolves keypresses against a [`BindingTable`].
#[derive(Debug, Clone, Default)]
pub struct DispatchEngine {
    table: BindingTable,
    state: DispatchState,
    /// Pending keys and repeat of the most recent resolution, kept so the
    /// executing node can read the repeat count and so an unclaimed
    /// command can be offered to the parent again.
    last_resolution: Option<KeySequenceAccumulator>,
}

impl DispatchEngine {
    pub fn new(table: BindingTable) -> Self {
        Self {
            table,
            state: DispatchState::default(),
            last_resolution: None,
        }
    }

    pub fn state(&self) -> &DispatchState {
        &self.state
    }

    /// Runs one dispatch step for `key` on behalf of a node in `context`.
    ///
    /// Returns the bound command if the pending sequence resolves in the
    /// global scope or in `context` (global first). A key already recorded
    /// by a descendant (the engine is bubbling) is not recorded again, so
    /// every ancestor retries the identical sequence.
    pub fn resolve(
        &mut self,
        key: &KeyToken,
        context: &str,
        is_terminal: bool,
    ) -> Option<CommandId> {
        if key.is_esc() {
            if !self.state.is_simulating {
                tracing::debug!("dispatch: esc in {} resets", context);
                self.reset();
            }
            return None;
        }

        if !self.state.is_bubbling && !self.state.is_simulating {
            self.last_resolution = None;
            self.state.pending.record(key);
        }

        let signature = self.state.pending.signature().to_string();
        if let Some(command) = self.table.lookup(&signature, &[GLOBAL_CONTEXT, context]) {
            let command = command.clone();
            tracing::debug!(
                "dispatch: '{}' x{} resolved to {} in {}",
                signature,
                self.state.pending.repeat(),
                command,
                context
            );
            if !self.state.is_simulating {
                let resolved = std::mem::take(&mut self.state.pending);
                self.reset();
                self.last_resolution = Some(resolved);
            }
            return Some(command);
        }

        let extends = self.table.is_prefix(&signature);
        if is_terminal {
            self.set_bubbling(false);
            if !extends && !self.state.is_simulating {
                tracing::debug!("dispatch: '{}' abandoned at {}", signature, context);
                self.reset();
            }
        } else {
            self.set_bubbling(true);
        }

        None
    }

    /// Repeat count for the command being executed, or the pending repeat
    /// while accumulating. Zero means "no explicit repeat".
    pub fn repeat_count(&self) -> u32 {
        match &self.last_resolution {
            Some(resolved) => resolved.repeat(),
            None => self.state.pending.repeat(),
        }
    }

    /// Hands the last resolved sequence back to the pending state and marks
    /// it as bubbling, so the parent retries it under its own context.
    /// Used when the resolving node has no handler for the command.
    pub fn reoffer(&mut self) {
        if self.state.is_simulating {
            return;
        }
        if let Some(resolved) = self.last_resolution.take() {
            self.state.pending = resolved;
        }
        self.state.is_bubbling = true;
    }

    /// Freezes (or unfreezes) the dispatch state while a handler replays
    /// primitive keys against native widget behaviour.
    pub fn set_simulating(&mut self, simulating: bool) {
        self.state.is_simulating = simulating;
    }

    pub fn set_bubbling(&mut self, bubbling: bool) {
        if !self.state.is_simulating {
            self.state.is_bubbling = bubbling;
        }
    }

    /// Returns to `IDLE`.
    pub fn reset(&mut self) {
        self.state.pending.reset();
        self.state.is_bubbling = false;
        self.last_resolution = None;
    }

    pub fn is_prefix(&self, sequence: &str) -> bool {
        self.table.is_prefix(sequence)
    }

    pub fn is_simulating(&self) -> bool {
        self.state.is_simulating
    }
}
