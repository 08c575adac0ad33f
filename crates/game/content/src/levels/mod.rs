//! Fixed level layouts.
//!
//! Builders return generic snapshots; callers run them through
//! [`specialize`](adventure_core::specialize) (directly or via the runtime
//! session) before showing them to anyone.
pub mod intro;
