pub mod employee;
pub mod resource;
pub mod schedule;
pub mod service;
pub mod slot;
pub mod store;

pub use employee::*;
pub use resource::*;
pub use schedule::*;
pub use service::*;
pub use slot::*;
pub use store::*;
