use ai_core::{Agent, AiResult, Sensor, Sensors, TickContext};
use ai_tools::TagCatalog;

use crate::bt::{Behavior, BtNode, BtStatus};
use crate::nodes::{
    Condition, ExecuteAction, LogAction, RandomConditional, Selector, Sequence, SubtreeReference,
    UtilitySelector, WaitAction,
};
use crate::task::TaskNode;

/// A root node plus the context it runs against.
///
/// Each tick runs the root once. When the root finishes (success or failure) the next tick starts
/// a fresh run. Sensors run in order before the root, so the root sees what they wrote this tick.
pub struct BehaviorTree<C: 'static> {
    root: Behavior<C>,
    context: C,
    sensors: Sensors<C>,
    last: BtStatus,
}

impl<C: 'static> BehaviorTree<C> {
    pub fn new(root: impl BtNode<C>, context: C) -> Self {
        Self::from_box(Box::new(root), context)
    }

    pub fn from_box(root: Box<dyn BtNode<C>>, context: C) -> Self {
        Self {
            root: Behavior::from_box(root),
            context,
            sensors: Sensors::new(),
            last: BtStatus::Running,
        }
    }

    pub fn with_sensor(mut self, sensor: impl Sensor<C>) -> Self {
        self.add_sensor(sensor);
        self
    }

    pub fn add_sensor(&mut self, sensor: impl Sensor<C>) {
        self.sensors.push(sensor);
    }

    pub fn tick(&mut self, time: &TickContext) -> AiResult<BtStatus> {
        self.sensors.sense(time, &mut self.context)?;
        self.last = self.root.tick(time, &mut self.context)?;
        tracing::trace!(tick = time.tick, status = ?self.last, "bt tick");
        Ok(self.last)
    }

    pub fn last_status(&self) -> BtStatus {
        self.last
    }

    pub fn root(&self) -> &Behavior<C> {
        &self.root
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }
}

impl<C: 'static> Agent for BehaviorTree<C> {
    fn tick(&mut self, time: &TickContext) -> AiResult<()> {
        BehaviorTree::tick(self, time).map(|_| ())
    }
}

/// Tags for every built-in node, for authoring tools.
pub fn catalog() -> TagCatalog {
    type Ctx = ();
    let mut catalog = TagCatalog::new();
    catalog
        .register::<Sequence<Ctx>>()
        .register::<Selector<Ctx>>()
        .register::<UtilitySelector<Ctx>>()
        .register::<Condition<fn(&TickContext, &Ctx) -> bool>>()
        .register::<RandomConditional>()
        .register::<ExecuteAction<Ctx>>()
        .register::<LogAction>()
        .register::<WaitAction>()
        .register::<TaskNode<Ctx>>()
        .register::<SubtreeReference>();
    catalog
}
