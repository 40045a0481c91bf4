//! # Core Application Logic
//!
//! This module contains convarc's form logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (commands)    │
//!                    │  • update() (reducer)   │
//!                    │  • Config (settings)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct - what little domain state a form has
//! - [`action`]: The `Action` enum - the two things a button can do
//! - [`config`]: Settings with a defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod state;
