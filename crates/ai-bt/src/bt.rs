use ai_core::{AiResult, TickContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BtStatus {
    Running,
    Success,
    Failure,
}

impl BtStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, BtStatus::Running)
    }

    pub fn from_bool(ok: bool) -> Self {
        if ok {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }
}

/// Which family a node belongs to. Informational; dispatch goes through [`BtNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Action,
    Conditional,
    Task,
    SubtreeReference,
    Composite,
}

/// One unit of behavior tree execution over a context `C` (usually a `Blackboard`).
///
/// `update` is called once per tick while the node runs. `on_start` / `on_end` bracket each run;
/// [`Behavior`] is what guarantees they are called exactly once per run. `utility` and `cost`
/// must be side-effect free: parents may read them at any time to choose between children.
pub trait BtNode<C>: 'static {
    fn update(&mut self, time: &TickContext, context: &mut C) -> AiResult<BtStatus>;

    fn on_start(&mut self) {}

    fn on_end(&mut self) {}

    fn utility(&self) -> f32 {
        0.0
    }

    fn cost(&self) -> f32 {
        0.0
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }
}

/// A node plus its run state.
///
/// - First tick of a run: `on_start`, then `update`.
/// - Terminal status: `on_end`; the next tick starts a fresh run.
/// - An `update` error propagates and leaves the run open.
pub struct Behavior<C: 'static> {
    node: Box<dyn BtNode<C>>,
    running: bool,
}

impl<C: 'static> Behavior<C> {
    pub fn new(node: impl BtNode<C>) -> Self {
        Self::from_box(Box::new(node))
    }

    pub fn from_box(node: Box<dyn BtNode<C>>) -> Self {
        Self {
            node,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn node(&self) -> &dyn BtNode<C> {
        &*self.node
    }

    pub fn utility(&self) -> f32 {
        self.node.utility()
    }

    pub fn cost(&self) -> f32 {
        self.node.cost()
    }

    pub fn tick(&mut self, time: &TickContext, context: &mut C) -> AiResult<BtStatus> {
        if !self.running {
            tracing::debug!(tick = time.tick, kind = ?self.node.kind(), "bt node start");
            self.node.on_start();
            self.running = true;
        }

        let status = self.node.update(time, context)?;
        if status.is_terminal() {
            tracing::debug!(tick = time.tick, kind = ?self.node.kind(), ?status, "bt node end");
            self.running = false;
            self.node.on_end();
        }
        Ok(status)
    }

    /// End a run early. No-op when the node is not running.
    pub fn abort(&mut self) {
        if self.running {
            self.running = false;
            self.node.on_end();
        }
    }
}
