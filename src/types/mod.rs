pub mod stack;
pub mod suggest;
pub mod value_type;

pub use stack::*;
pub use suggest::*;
pub use value_type::*;
