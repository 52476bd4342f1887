//! Ratatui-based picker host
//!
//! This module hosts a [`crate::picker::Picker`] in a terminal form using
//! ratatui for widgets and crossterm for events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           PickerApp / FormSession           │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   Picker   │ │  Ratatui  │ │ Crossterm │
//! │   (core)   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod app;
mod events;
mod theme;
pub mod widgets;

pub use app::{FormResult, FormSession, OpenOwnership, PickerApp};
pub use events::{FormAction, HitAreas, map_key, map_mouse};
pub use theme::Theme;
