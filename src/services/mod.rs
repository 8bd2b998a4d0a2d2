pub mod availability_service;
pub mod resource_filter;
pub mod schedule_resolver;
pub mod slot_grid;
pub mod slot_placement;

pub use availability_service::*;
pub use resource_filter::*;
pub use schedule_resolver::*;
pub use slot_grid::*;
pub use slot_placement::*;
