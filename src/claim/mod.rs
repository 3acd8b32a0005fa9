//! Claim snapshots, calendar helpers and portfolio loading

mod data;
pub mod dates;
pub mod loader;

pub use data::ClaimSnapshot;
pub use loader::{load_claims, load_claims_from_reader};
