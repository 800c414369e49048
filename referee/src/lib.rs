mod error;
mod game;
mod script;
pub use error::*;
pub use game::*;
pub use script::*;
