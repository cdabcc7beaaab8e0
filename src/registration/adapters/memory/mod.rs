//! In-memory registrator for tests and local runs.

mod registrator;

pub use registrator::InMemoryRegistrator;
