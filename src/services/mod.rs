pub mod accounts;
pub mod favorites;

pub use accounts::*;
pub use favorites::*;
