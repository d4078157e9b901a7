//! Backend service contract, error taxonomy, and in-process adapters.

pub mod error;
pub mod memory;
pub mod service;
