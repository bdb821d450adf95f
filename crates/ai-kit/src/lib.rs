//! Decision-making building blocks for game entities.
//!
//! Re-exports the `ai-*` crates behind features: behavior trees (`bt`), utility AI (`utility`),
//! the shared blackboard and tick primitives (`core`), search graphs (`nav`) and node metadata
//! for authoring tools (`tools`).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use ai_tools as tools;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use ai_nav as nav;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use ai_bt as bt;

#[cfg(feature = "utility")]
#[cfg_attr(docsrs, doc(cfg(feature = "utility")))]
pub use ai_utility as utility;

/// Every built-in node, appraisal and action tag in one catalog.
#[cfg(all(feature = "bt", feature = "utility", feature = "tools"))]
#[cfg_attr(
    docsrs,
    doc(cfg(all(feature = "bt", feature = "utility", feature = "tools")))
)]
pub fn catalog() -> ai_tools::TagCatalog {
    let mut catalog = ai_bt::catalog();
    catalog.merge(ai_utility::catalog());
    catalog
}
