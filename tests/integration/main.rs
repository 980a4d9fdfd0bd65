//! Integration tests

mod config_tests;
mod library_tests;
mod seed_tests;
