pub mod argument;
pub mod endpoint;
pub mod id;
pub mod instruction;
pub mod kind;

pub use argument::*;
pub use endpoint::*;
pub use id::*;
pub use instruction::*;
pub use kind::*;
