use ai_core::{AiResult, TickContext};
use ai_tools::{NodeCategory, NodeTag, ParamKind, Tagged};

use crate::bt::{BtNode, BtStatus, NodeKind};

/// GOAP-style unit of work.
///
/// Besides the ticking members it shares with [`BtNode`], an operator can say whether its goal
/// already holds (`is_satisfied`) and apply its effect immediately (`execute`), which planners use
/// without ticking it.
pub trait Operator<C>: 'static {
    fn update(&mut self, time: &TickContext, context: &mut C) -> AiResult<BtStatus>;

    fn on_start(&mut self) {}

    fn on_end(&mut self) {}

    fn utility(&self) -> f32 {
        0.0
    }

    fn cost(&self) -> f32 {
        0.0
    }

    fn is_satisfied(&self, context: &C) -> bool;

    fn execute(&mut self, context: &mut C) -> AiResult<()>;
}

/// Tree leaf that forwards every node member to its [`Operator`].
pub struct TaskNode<C: 'static> {
    operator: Box<dyn Operator<C>>,
}

impl<C: 'static> TaskNode<C> {
    pub fn new(operator: impl Operator<C>) -> Self {
        Self {
            operator: Box::new(operator),
        }
    }

    pub fn operator(&self) -> &dyn Operator<C> {
        &*self.operator
    }

    pub fn is_satisfied(&self, context: &C) -> bool {
        self.operator.is_satisfied(context)
    }

    pub fn execute(&mut self, context: &mut C) -> AiResult<()> {
        self.operator.execute(context)
    }
}

impl<C: 'static> BtNode<C> for TaskNode<C> {
    fn update(&mut self, time: &TickContext, context: &mut C) -> AiResult<BtStatus> {
        self.operator.update(time, context)
    }

    fn on_start(&mut self) {
        self.operator.on_start();
    }

    fn on_end(&mut self) {
        self.operator.on_end();
    }

    fn utility(&self) -> f32 {
        self.operator.utility()
    }

    fn cost(&self) -> f32 {
        self.operator.cost()
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Task
    }
}

impl<C: 'static> Tagged for TaskNode<C> {
    fn tag() -> NodeTag {
        NodeTag::new("TaskNode", NodeCategory::Task).with_param("operator", ParamKind::Node)
    }
}
