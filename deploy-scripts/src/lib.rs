//! Scripts for resolving constructor parameters and dispatching contract deployments.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod constants;
pub mod deployer;
pub mod deployments;
pub mod dispatch;
pub mod errors;
pub mod registry;
pub mod validate;
