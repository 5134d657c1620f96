//! Actor + Relay primitives for reactive UI state
//!
//! - **[`Relay`]** carries events from views to the state that reacts to them
//! - **[`Actor`]** owns a value and the task that mutates it
//! - **[`Atom`]** is the shorthand for view-local values
//!
//! Views never mutate state directly. They send through a relay and render
//! from signals.

pub mod actor;
pub mod atom;
pub mod relay;

pub use actor::Actor;
pub use atom::Atom;
pub use relay::{Relay, relay};
