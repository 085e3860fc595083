//! Widgets of the tabflow UI framework.
//!
//! The centerpiece is [tabs::Tabs], an animated tab switcher composing
//! [button::Button]s into a measured tab strip with a hover highlight, a
//! selection indicator and an exit-then-enter panel switcher. [pane::Pane]
//! is a plain surface used for panel bodies, and [motion] holds the
//! retargetable animation primitives the chrome is driven by.

#![warn(missing_docs)]

/// A clickable region with interaction callbacks.
pub mod button;
/// Animation timing, easing and retargetable animated values.
pub mod motion;
/// A plain rectangular surface.
pub mod pane;
/// The animated tab switcher.
pub mod tabs;
