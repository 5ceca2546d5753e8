pub mod config;
pub mod context;
pub mod deliverable;
pub mod error;
pub mod franchise_group;
pub mod initiative;
pub mod issue;
pub mod seed;
pub mod stats;
pub mod store;
pub mod types;
pub mod user;
pub mod validate;

pub use error::{Result, RolloutError};
pub use store::{Record, Store};
