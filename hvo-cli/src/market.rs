//! Daily fuel, quota, and BEHG prices.

mod fallback;
mod provider;
mod snapshot;

pub use self::{
    provider::Provider,
    snapshot::{MarketSnapshot, Provenance, behg_rate_per_liter, quota_price},
};
