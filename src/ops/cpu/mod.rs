//! CPU implementation of tensor operations.
//!
//! This module contains the operation trait implementations for the CPU client.
//! Each operation type has its own module; the work itself lives in
//! `runtime::cpu::helpers`.

pub mod cumulative;
pub mod reduce;
pub mod shape;
pub mod statistics;
pub mod type_conversion;
