pub mod auth;
pub mod cors;
pub mod error;

pub use auth::*;
pub use cors::*;
pub use error::*;
