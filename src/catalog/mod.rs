pub mod definition;
pub mod lookup;

pub use definition::*;
pub use lookup::*;
