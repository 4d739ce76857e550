//! Feature slices: state, pure logic, flows and (wasm only) views.
pub mod devices;
pub mod dnd;
pub mod groups;
pub mod immich;
pub mod tracking;
