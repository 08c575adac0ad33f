//! Session orchestration over the core transforms.
//!
//! This crate wires a simulation backend to the snapshot rewriter so that
//! every snapshot a consumer sees is fully specialized. It is the only layer
//! that logs; the core stays pure and silent.
pub mod session;

pub use session::Session;
