//! Behavior Tree runtime built on `ai-core`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod nodes;
pub mod task;
pub mod tree;

pub use bt::{Behavior, BtNode, BtStatus, NodeKind};
pub use nodes::{
    Condition, ConditionNode, Conditional, ExecuteAction, LogAction, LogLevel, RandomConditional,
    Selector, Sequence, SubtreeReference, UtilitySelector, WaitAction,
};
pub use task::{Operator, TaskNode};
pub use tree::{catalog, BehaviorTree};
