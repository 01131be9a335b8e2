//! Adapter implementations for board interaction ports.

pub mod memory;
