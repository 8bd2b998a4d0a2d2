pub mod booking_helpers;
pub mod test_db;

#[allow(unused_imports)]
pub use booking_helpers::*;
#[allow(unused_imports)]
pub use test_db::*;
