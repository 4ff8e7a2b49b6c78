//! # Core Models Module
//!
//! Data structures representing a residue-grouped molecular topology.
//!
//! ## Key Components
//!
//! - [`atom`] - Per-atom physical properties and residue membership
//! - [`residue`] - Contiguous residue spans over the atom sequence
//! - [`topology`] - The validated atom and name sequences
//! - [`builder`] - Incremental, residue-by-residue topology construction
//! - [`interaction`] - Bonded interactions whose atoms have been resolved to indices
//!
//! ## Usage
//!
//! ```
//! use reslink::core::models::builder::TopologyBuilder;
//!
//! let mut builder = TopologyBuilder::new();
//! builder.start_residue(1, "GLY")?;
//! builder.add_atom("N", 14.007, -0.47, 1)?;
//! builder.add_atom("CA", 12.011, 0.07, 2)?;
//! let topology = builder.build();
//!
//! assert_eq!(topology.len(), 2);
//! assert_eq!(topology.name(1), Some("CA"));
//! # Ok::<(), reslink::core::models::topology::TopologyError>(())
//! ```

pub mod atom;
pub mod builder;
pub mod interaction;
pub mod residue;
pub mod topology;
