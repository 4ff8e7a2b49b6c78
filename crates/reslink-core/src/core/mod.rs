//! # Core Module
//!
//! Fundamental building blocks shared by the resolver and the workflows.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atom records, residue spans and the
//!   residue-grouped [`models::topology::Topology`]
//! - **Residue Templates** ([`templates`]) - Per-residue bonded interaction definitions
//!   expressed as atom name tokens
//! - **File I/O** ([`io`]) - Reading and writing topologies, exporting resolved interactions
//!
//! All data in this module is read-only once constructed; the only mutation entry point
//! for an atom record is [`models::atom::Atom::set_properties`].

pub mod io;
pub mod models;
pub mod templates;
