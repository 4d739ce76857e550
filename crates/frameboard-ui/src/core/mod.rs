//! Core, DOM-free primitives shared by every feature slice.
pub mod config;
pub mod error;
pub mod events;
pub mod logic;
pub mod store;
pub mod sync;

#[cfg(test)]
pub(crate) mod testing;
