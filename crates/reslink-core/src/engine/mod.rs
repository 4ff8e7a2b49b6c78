//! # Engine Module
//!
//! The logic core of reslink: resolving adjacency-tagged atom names against a
//! residue-grouped [`Topology`](crate::core::models::topology::Topology).
//!
//! ## Architecture
//!
//! - **Resolution** ([`resolver`]) - Token decoding and the residue-scoped name scan
//! - **Configuration** ([`config`]) - Missing-atom policies and workflow settings
//! - **Error Handling** ([`error`]) - Resolution and engine error types
//!
//! ## Failure Model
//!
//! The engine never terminates the process. A lookup that fails under
//! [`config::MissingPolicy::Reject`] surfaces as [`error::ResolveError::AtomNotFound`], and
//! it is up to the caller to recover, propagate, or abort.

pub mod config;
pub mod error;
pub mod resolver;
