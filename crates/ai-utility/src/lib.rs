//! Utility AI: score considerations against a context and run the winner's action.
//!
//! A [`Reasoner`] owns ordered [`Consideration`]s plus a default one and a [`SelectionStrategy`].
//! [`UtilityAi`] drives a reasoner on a fixed period with catch-up. Scores are `f32`; NaN scores
//! count as negative infinity and ties are broken by registration order.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod appraisal;
#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub mod bt;
pub mod consideration;
pub mod driver;
pub mod reasoner;

pub use action::{ActionWithOptions, CompositeAction, FnAction, ReasonerAction, UtilityAction};
pub use appraisal::{Appraisal, FixedAppraisal, FnAppraisal, OptionAppraisal};
#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use bt::UtilityNode;
pub use consideration::{Aggregate, Consideration};
pub use driver::{UtilityAi, UtilityAiConfig};
pub use reasoner::{Choice, FirstScore, HighestScore, Reasoner, SelectionStrategy};

use ai_tools::TagCatalog;

/// Tags for every utility building block, for authoring tools.
pub fn catalog() -> TagCatalog {
    type Ctx = ();
    let mut catalog = TagCatalog::new();
    catalog
        .register::<FixedAppraisal>()
        .register::<FnAppraisal<fn(&Ctx) -> f32>>()
        .register::<FirstScore>()
        .register::<HighestScore>()
        .register::<FnAction<Ctx>>()
        .register::<CompositeAction<Ctx>>()
        .register::<ActionWithOptions<Ctx, Ctx>>()
        .register::<ReasonerAction<Ctx>>();
    #[cfg(feature = "bt")]
    catalog.register::<UtilityNode<Ctx>>();
    catalog
}
