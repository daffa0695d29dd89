//! vscch wizard orchestration layer.
//!
//! Use cases that move the wizard forward. They write the shared
//! [`ConfigStore`](vc_core::ConfigStore); discovery is delegated to the
//! ports in `vc_core::ports`.

pub mod deps;
pub mod error;
pub mod usecase_factory;
pub mod usecases;

pub use deps::AppDeps;
pub use error::SelectionError;
pub use usecase_factory::UseCases;
