//! Adapter implementations for the todo ports.

pub mod http;
pub mod memory;
