//! # reslink Core Library
//!
//! Residue-scoped atom name resolution for molecular topologies, and the
//! template-driven generation of bonded interactions built on top of it.
//!
//! ## Architectural Philosophy
//!
//! The library is organised in three layers.
//!
//! - **[`core`]: The Foundation.** Plain data models (`Atom`, `Residue`, `Topology`),
//!   residue interaction templates, and I/O for topologies and interaction lists.
//!
//! - **[`engine`]: The Logic Core.** The [`engine::resolver::AtomResolver`], which maps an
//!   adjacency-tagged atom name (`"CA"`, `"+N"`, `"-C"`) onto an atom index, together with the
//!   configuration and error types shared by higher layers.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures such as expanding residue
//!   templates over a whole topology into a list of resolved bonds, angles and dihedrals.

pub mod core;
pub mod engine;
pub mod workflows;
