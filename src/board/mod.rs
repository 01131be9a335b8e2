//! Kanban board state and task movement.
//!
//! Tasks live in one flat ordered sequence and reference one of several
//! ordered boards. Drag gestures and arrow keys are turned into move intents
//! which the state container validates and commits. The module follows
//! hexagonal architecture:
//!
//! - Domain types and movement rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Container, surface and event loop in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
