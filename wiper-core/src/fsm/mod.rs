//! Table-driven finite-state machine
//!
//! The table is immutable data; the interpreter owns the only mutable
//! piece, the cursor.

pub mod input;
pub mod interpreter;
pub mod output;
pub mod table;
pub mod wiper;

pub use input::InputVector;
pub use interpreter::{Interpreter, Step};
pub use output::OutputCode;
pub use table::{State, StateId, Table, TableError};
pub use wiper::{Position, WIPER_TABLE};
