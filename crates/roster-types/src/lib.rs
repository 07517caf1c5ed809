//! Roster Types - Pure type definitions
//!
//! Records stored by the roster server and the JSON envelopes it answers
//! with. No runtime or database dependencies, so clients can share them.

pub mod category;
pub mod employee;
pub mod response;

pub use category::*;
pub use employee::*;
pub use response::*;
