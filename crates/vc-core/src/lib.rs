//! # vc-core
//!
//! Core domain models and the wizard state store for vscch.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

pub mod compiler;
pub mod config;
pub mod options;
pub mod ports;
pub mod store;
pub mod verify;
pub mod workspace;

// Re-export commonly used types at the crate root
pub use compiler::{CompilerDescriptor, CompilerFamily, SetupId};
pub use config::{AppConfig, BuildConfig, ConfigError};
pub use options::{
    EnabledOptions, Options, OptionsProfile, ProfileKind, DEFAULT_PROFILE, NEWBIE_PROFILE,
};
pub use store::{ConfigStore, Slot, StoreSnapshot, SubscriptionId};
pub use verify::VerifyResult;
