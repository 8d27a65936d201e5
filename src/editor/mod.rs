//! Pure editing transitions over instructions.
//!
//! Every function here maps `(old instruction, event, catalog, stack)` to a new
//! value. Nothing fails: incomplete selections and dangling references are
//! ordinary intermediate states.

pub mod rename;
pub mod transition;

pub use rename::*;
pub use transition::*;
