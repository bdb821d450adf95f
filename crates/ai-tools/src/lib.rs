//! Tooling primitives for game AI.
//!
//! Node and action types describe themselves with a [`NodeTag`] so authoring and visualization
//! tools can list what is available without instantiating anything. Tags have no effect on
//! ticking.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod meta;

pub use meta::{NodeCategory, NodeTag, ParamKind, ParamTag, TagCatalog, Tagged};
