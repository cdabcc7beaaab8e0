//! Unit tests for the registration module.

mod domain_tests;
