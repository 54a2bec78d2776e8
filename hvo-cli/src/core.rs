pub mod assumptions;
pub mod calculator;
pub mod fleet;
pub mod metrics;
pub mod scenarios;
