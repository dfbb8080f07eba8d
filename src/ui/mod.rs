//! Minimal rendering model for the terminal client
//!
//! - [`Component`] - a node of the mounted tree
//! - [`Screen`] - what a component renders to
//! - [`Action`] - what the user can do on a screen
//! - [`RenderError`] - a component's failure to render
//! - [`ActionOutcome`] - how a component reacted to an action

pub mod component;
pub mod screen;

pub use component::{ActionOutcome, Component, RenderError};
pub use screen::{Action, Screen};
