//! Kanban board movement engine.
//!
//! This crate decides whether a task on a kanban board may move, and how the
//! board changes when it does. It covers reordering tasks within and across
//! boards by drag and drop or by keyboard, and reassigning tasks to
//! neighbouring boards. Rendering and input wiring stay with the embedding
//! presentation layer.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure movement rules and board state types
//! - **Ports**: Trait interfaces for notifications and platform drag handles
//! - **Adapters**: In-memory implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Board state, movement rules, and interaction handling

pub mod board;
