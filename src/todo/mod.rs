//! Todo list state management and synchronisation.
//!
//! A single owned [`domain::TodoStore`] reconciles locally created todos
//! with pages fetched from a remote collection and mediates every mutation.
//! Display order is always derived on demand by [`domain::project`]. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
