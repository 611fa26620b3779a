//! Input handling: vim-style key sequences dispatched through the widget tree.
//!
//! Raw terminal events become [`KeyToken`]s. Each token travels from the
//! focused leaf widget up to the root; every node on the way first tries
//! its native handling and then asks the shared [`DispatchEngine`] to
//! resolve the pending sequence under the node's context.
//!
//! # Architecture
//!
//! ```text
//! KeyEvent -> KeyToken -> root.keypress()
//!                           └─ native_keypress() ─▶ focused child.keypress() ─▶ ...
//!                           └─ DispatchEngine::resolve(key, context) -> CommandId
//!                           └─ KeypressRouter handler -> KeyOutcome
//! ```
//!
//! # Modules
//!
//! - [`key`] - [`KeyToken`] and conversion from crossterm events
//! - [`sequence`] - [`KeySequenceAccumulator`] for multi-key sequences and repeat counts
//! - [`bindings`] - [`BindingTable`] scoped by context
//! - [`engine`] - [`DispatchEngine`] state machine
//! - [`router`] - [`Dispatchable`] node contract and [`KeypressRouter`]
//! - [`keybindings`] - Default key binding configuration

pub mod bindings;
pub mod engine;
pub mod key;
pub mod keybindings;
pub mod router;
pub mod sequence;

pub use bindings::{BindingTable, BindingWarning, CommandId, GLOBAL_CONTEXT};
pub use engine::{DispatchEngine, DispatchState};
pub use key::KeyToken;
pub use keybindings::{contexts, default_bindings};
pub use router::{offer, replay, Dispatchable, KeyOutcome, KeypressRouter, NodeCx};
pub use sequence::KeySequenceAccumulator;
