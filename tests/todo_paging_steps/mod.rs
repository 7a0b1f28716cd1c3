//! Step definitions for todo paging BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
