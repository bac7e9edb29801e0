pub mod constant;
pub mod token;
pub mod utils;

pub use constant::*;
pub use token::*;
pub use utils::*;
