//! Ports (trait boundaries) between the solver core and its drivers.

pub mod agent;

pub use agent::Agent;
