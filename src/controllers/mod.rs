//! Page Controllers
//!
//! Async flows behind each page, generic over `CafeApi`. They return plain
//! outcome values; the components decide how to show them.

pub mod admin;
pub mod customer;
pub mod tracking;

#[cfg(test)]
pub(crate) mod fake;
