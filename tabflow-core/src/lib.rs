#![warn(missing_docs)]

//! Core library for tabflow => See the `tabflow` crate.
//!
//! Contains the widget trait and the ambient plumbing widgets are built on:
//! layout computation, per-frame input, redraw flags, signals and the
//! vector graphics abstraction.

pub use vello as vg;

/// Contains useful types and functions for layout interaction.
pub mod layout;

/// Contains per-frame input state delivered by the embedding host.
pub mod input;

/// Contains the signal system for reactive widget state.
pub mod signal;

/// Contains the [Update](update::Update) flags widgets return from their update pass.
pub mod update;

/// Contains the core widget functionalities.
pub mod widget;

/// Contains the vector graphics interface abstraction.
pub mod vgi;
