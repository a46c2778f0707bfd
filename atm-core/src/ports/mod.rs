//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The session
//! depends only on these traits, not on a concrete console.

mod terminal;

pub use terminal::{Terminal, Tone};
