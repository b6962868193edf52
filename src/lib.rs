//! Wire4D application library
//!
//! Configuration, input mapping, scene construction and the per-frame
//! systems used by the `wire4d` binary.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
