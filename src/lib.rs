//! Todos: task list state management and remote synchronisation.
//!
//! This crate provides the in-memory model behind a personal todo list: an
//! owned store that reconciles locally created todos with pages fetched
//! from a remote collection, the mutation commands the presentation layer
//! dispatches, and the filtered, sorted projection it renders.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state and projection logic with no I/O
//! - **Ports**: Abstract trait interfaces for the remote todo source
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//! - **Services**: Page loading, paging state, and the list controller
//!
//! # Modules
//!
//! - [`todo`]: Todo store, remote loading, and projections
//! - [`config`]: Remote loading configuration

pub mod config;
pub mod todo;
