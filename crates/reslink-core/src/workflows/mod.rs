//! # Workflows Module
//!
//! High-level procedures that tie the [`core`](crate::core) models and the
//! [`engine`](crate::engine) resolver together.
//!
//! - **Interaction Linking** ([`link`]) - Expands residue templates over a topology into
//!   resolved bonds, angles, dihedrals and impropers, honouring the configured
//!   missing-atom and missing-template policies.

pub mod link;
