//! Simulation run control and program loading.
//!
//! Provides the [`Simulator`] driver and helpers for turning program images
//! into instruction words.

pub mod loader;
pub mod simulator;

pub use self::simulator::Simulator;
