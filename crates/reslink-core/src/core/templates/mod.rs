//! # Templates Module
//!
//! Residue building blocks that describe bonded interactions in terms of atom name
//! tokens, e.g. the peptide bond of every amino acid as `["-C", "N"]`.
//!
//! - [`kind`] - The interaction kinds a template can declare
//! - [`registry`] - Loading and looking up templates from TOML files
//!
//! ```ignore
//! use reslink::core::templates::registry::TemplateRegistry;
//!
//! let registry = TemplateRegistry::load(Path::new("templates.toml"))?;
//! let ala = registry.get("ALA").unwrap();
//! ```

pub mod kind;
pub mod registry;
