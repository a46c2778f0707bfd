//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Plain line-based I/O over any reader/writer pair for the Terminal port

pub mod line;

pub use line::LineTerminal;
