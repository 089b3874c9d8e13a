//! Interactive menu
//!
//! A small read-evaluate loop over any line-based input and any writer.
//! The binary wires it to stdin/stdout; tests drive it from memory.

mod choice;
mod session;

pub use choice::MenuChoice;
pub use session::MenuLoop;
