//! ctui - a vim-style terminal contact manager.
//!
//! Keys are dispatched through a widget tree by a hierarchical keybinding
//! engine (see [`input`]). The library exposes every module for the
//! integration tests and benchmarks.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod repository;
pub mod terminal;
pub mod ui;
