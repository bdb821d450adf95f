use ai_bt::{BtNode, BtStatus};
use ai_core::{AiResult, TickContext};
use ai_tools::{NodeCategory, NodeTag, ParamKind, Tagged};

use crate::Reasoner;

/// Reasoner as a BT leaf node.
///
/// Each tick runs one select-then-execute cycle against the tree's context:
/// - Returns `Success` when the chosen consideration had an action and it ran.
/// - Returns `Failure` when the chosen consideration has no action (allowing BT fallbacks).
/// - Propagates errors raised by the action.
pub struct UtilityNode<C: 'static> {
    reasoner: Reasoner<C>,
}

impl<C: 'static> UtilityNode<C> {
    pub fn new(reasoner: Reasoner<C>) -> Self {
        Self { reasoner }
    }

    pub fn reasoner(&self) -> &Reasoner<C> {
        &self.reasoner
    }
}

impl<C: 'static> BtNode<C> for UtilityNode<C> {
    fn update(&mut self, _time: &TickContext, context: &mut C) -> AiResult<BtStatus> {
        match self.reasoner.select(context) {
            Some(action) => {
                action.execute(context)?;
                Ok(BtStatus::Success)
            }
            None => Ok(BtStatus::Failure),
        }
    }
}

impl<C: 'static> Tagged for UtilityNode<C> {
    fn tag() -> NodeTag {
        NodeTag::new("UtilityNode", NodeCategory::Reasoner).with_param("reasoner", ParamKind::Node)
    }
}
