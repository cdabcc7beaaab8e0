//! Step definitions for service registration BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
