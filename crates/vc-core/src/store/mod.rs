//! Wizard state store.
//!
//! A [`Slot`] is one observable value; [`ConfigStore`] groups the five slots
//! the wizard steps fill in.

mod config_store;
pub mod slot;

pub use config_store::{ConfigStore, StoreSnapshot};
pub use slot::{Observer, Slot, SubscriptionId};
