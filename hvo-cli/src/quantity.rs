#[macro_use]
pub mod macros;

pub mod currency;
pub mod distance;
pub mod mass;
pub mod volume;
