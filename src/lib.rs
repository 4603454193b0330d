//! gridshift
//!
//! Drag-to-reorder engine for grid layouts with first-class empty slots,
//! plus a terminal demo that exercises it.
//!
//! The crate follows a Pure Core / Impure Shell split: [`state`] holds the
//! interaction state machines and the pure reorder engine, [`host`] the
//! collaborator traits they talk through, and [`view`] the terminal shell.

pub mod config;
pub mod host;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

// Demo grid host wired into the main loop
pub mod integration;

#[cfg(test)]
mod test_harness;
