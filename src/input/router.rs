//! Node adapter contract.
//!
//! Every interactive widget implements [`Dispatchable`] and holds a
//! [`KeypressRouter`] built at construction time. The router carries the
//! node's context name and its command map; its
//! [`dispatch`](KeypressRouter::dispatch) runs the per-node part of the
//! dispatch algorithm:
//!
//! 1. `esc` resets the engine before anything else sees it.
//! 2. The node's native handling gets the key first. Containers forward it
//!    to their focused child here, so resolution always starts at the leaf.
//! 3. An unconsumed key is resolved against the engine under the node's
//!    context. A command the node owns is executed; a command it does not
//!    own is handed back to the parent together with the key.
//! 4. The root resets the engine once a key has been consumed.

use std::collections::HashMap;
use std::fmt;

use super::engine::DispatchEngine;
use super::key::KeyToken;

/// Result of offering a key to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Unhandled(KeyToken),
}

impl KeyOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, KeyOutcome::Handled)
    }
}

/// Per-keypress context passed down the tree.
///
/// Gives nodes the shared engine and a sink for side effects the
/// application applies after the keypress has been fully dispatched.
pub struct NodeCx<'a, A> {
    pub engine: &'a mut DispatchEngine,
    actions: &'a mut Vec<A>,
}

impl<'a, A> NodeCx<'a, A> {
    pub fn new(engine: &'a mut DispatchEngine, actions: &'a mut Vec<A>) -> Self {
        Self { engine, actions }
    }

    pub fn emit(&mut self, action: A) {
        self.actions.push(action);
    }

    /// Repeat count of the command being executed.
    pub fn repeat(&self) -> u32 {
        self.engine.repeat_count()
    }

    /// Repeat count with "no explicit repeat" meaning once.
    pub fn times(&self) -> u32 {
        self.repeat().max(1)
    }
}

/// Handler registered for a command id.
pub type CommandHandler<N> =
    fn(&mut N, &mut NodeCx<'_, <N as Dispatchable>::Action>) -> KeyOutcome;

/// Capability shared by every widget that takes part in key dispatch.
pub trait Dispatchable: Sized {
    /// Side effect type emitted through [`NodeCx::emit`].
    type Action;

    fn router(&self) -> &KeypressRouter<Self>;

    /// The node's own key handling (cursor movement, forwarding to the
    /// focused child). Must not consult the binding table.
    fn native_keypress(&mut self, key: KeyToken, cx: &mut NodeCx<'_, Self::Action>) -> KeyOutcome;

    fn keypress(&mut self, key: KeyToken, cx: &mut NodeCx<'_, Self::Action>) -> KeyOutcome {
        KeypressRouter::dispatch(self, key, cx)
    }
}

/// Context name and command map of one node.
pub struct KeypressRouter<N: Dispatchable> {
    context: &'static str,
    terminal: bool,
    commands: HashMap<&'static str, CommandHandler<N>>,
}

impl<N: Dispatchable> KeypressRouter<N> {
    pub fn builder(context: &'static str) -> KeypressRouterBuilder<N> {
        KeypressRouterBuilder {
            router: KeypressRouter {
                context,
                terminal: false,
                commands: HashMap::new(),
            },
        }
    }

    pub fn context(&self) -> &'static str {
        self.context
    }

    /// True for the root of the tree.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn owns(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn commands(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    fn handler(&self, command: &str) -> Option<CommandHandler<N>> {
        self.commands.get(command).copied()
    }

    /// Offers `key` to `node`, then to the binding table.
    pub fn dispatch(node: &mut N, key: KeyToken, cx: &mut NodeCx<'_, N::Action>) -> KeyOutcome {
        let (context, terminal) = {
            let router = node.router();
            (router.context, router.terminal)
        };

        if key.is_esc() && !cx.engine.is_simulating() {
            cx.engine.reset();
        }

        let key = match node.native_keypress(key, cx) {
            KeyOutcome::Handled => {
                if terminal && !cx.engine.is_simulating() {
                    cx.engine.reset();
                }
                return KeyOutcome::Handled;
            }
            KeyOutcome::Unhandled(key) => key,
        };

        let Some(command) = cx.engine.resolve(&key, context, terminal) else {
            return KeyOutcome::Unhandled(key);
        };

        let handler = node.router().handler(&command);
        match handler {
            Some(handler) => {
                tracing::debug!("{}: executing {} (repeat {})", context, command, cx.repeat());
                let outcome = handler(node, cx);
                if terminal && outcome.is_handled() && !cx.engine.is_simulating() {
                    cx.engine.reset();
                }
                outcome
            }
            None => {
                if !terminal {
                    cx.engine.reoffer();
                } else {
                    tracing::debug!("{}: no node handles {}", context, command);
                }
                KeyOutcome::Unhandled(key)
            }
        }
    }
}

impl<N: Dispatchable> fmt::Debug for KeypressRouter<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut commands: Vec<_> = self.commands.keys().collect();
        commands.sort();
        f.debug_struct("KeypressRouter")
            .field("context", &self.context)
            .field("terminal", &self.terminal)
            .field("commands", &commands)
            .finish()
    }
}

/// Builds a [`KeypressRouter`].
///
/// ```ignore
/// let router = KeypressRouter::builder("contact_list")
///     .command("move_down", ContactList::move_down)
///     .command("move_up", ContactList::move_up)
///     .build();
/// ```
pub struct KeypressRouterBuilder<N: Dispatchable> {
    router: KeypressRouter<N>,
}

impl<N: Dispatchable> KeypressRouterBuilder<N> {
    pub fn command(mut self, id: &'static str, handler: CommandHandler<N>) -> Self {
        if self.router.commands.insert(id, handler).is_some() {
            tracing::warn!("{}: handler for {} registered twice", self.router.context, id);
        }
        self
    }

    /// Marks the node as the root of the tree.
    pub fn terminal(mut self) -> Self {
        self.router.terminal = true;
        self
    }

    pub fn build(self) -> KeypressRouter<N> {
        self.router
    }
}

/// Replays `key` `times` times against the node's native handling with the
/// engine frozen. Returns the outcome of the last replay.
///
/// Children reached through [`offer`] only see their native handling while
/// a replay runs, so no bound command fires mid-replay.
pub fn replay<N: Dispatchable>(
    node: &mut N,
    cx: &mut NodeCx<'_, N::Action>,
    key: &str,
    times: u32,
) -> KeyOutcome {
    cx.engine.set_simulating(true);
    let mut outcome = KeyOutcome::Handled;
    for _ in 0..times {
        outcome = node.native_keypress(KeyToken::new(key), cx);
    }
    cx.engine.set_simulating(false);
    outcome
}

/// Forwards `key` from a container to one of its children.
///
/// A full dispatch normally, native handling only during a [`replay`].
pub fn offer<N: Dispatchable>(
    child: &mut N,
    key: KeyToken,
    cx: &mut NodeCx<'_, N::Action>,
) -> KeyOutcome {
    if cx.engine.is_simulating() {
        child.native_keypress(key, cx)
    } else {
        child.keypress(key, cx)
    }
}
