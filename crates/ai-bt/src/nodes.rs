use ai_core::{
    derive_seed, diagnostics, Agent, AiError, AiResult, RandomSource, SplitMix64, TickContext,
};
use ai_tools::{NodeCategory, NodeTag, ParamKind, Tagged};

use crate::bt::{Behavior, BtNode, BtStatus, NodeKind};

/// Run children in order until one fails. Resumes the running child on the next tick.
pub struct Sequence<C: 'static> {
    children: Vec<Behavior<C>>,
    index: usize,
}

impl<C: 'static> Sequence<C> {
    pub fn new(children: Vec<Box<dyn BtNode<C>>>) -> Self {
        Self {
            children: children.into_iter().map(Behavior::from_box).collect(),
            index: 0,
        }
    }

    fn reset(&mut self) {
        self.index = 0;
        for c in self.children.iter_mut() {
            c.abort();
        }
    }
}

impl<C: 'static> BtNode<C> for Sequence<C> {
    fn update(&mut self, time: &TickContext, context: &mut C) -> AiResult<BtStatus> {
        while self.index < self.children.len() {
            let status = self.children[self.index].tick(time, context)?;
            match status {
                BtStatus::Running => return Ok(BtStatus::Running),
                BtStatus::Failure => return Ok(BtStatus::Failure),
                BtStatus::Success => self.index += 1,
            }
        }
        Ok(BtStatus::Success)
    }

    fn on_start(&mut self) {
        self.reset();
    }

    fn on_end(&mut self) {
        self.reset();
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Composite
    }
}

impl<C: 'static> Tagged for Sequence<C> {
    fn tag() -> NodeTag {
        NodeTag::new("Sequence", NodeCategory::Composite).with_param("children", ParamKind::Node)
    }
}

/// Run children in order until one succeeds. Resumes the running child on the next tick.
pub struct Selector<C: 'static> {
    children: Vec<Behavior<C>>,
    index: usize,
}

impl<C: 'static> Selector<C> {
    pub fn new(children: Vec<Box<dyn BtNode<C>>>) -> Self {
        Self {
            children: children.into_iter().map(Behavior::from_box).collect(),
            index: 0,
        }
    }

    fn reset(&mut self) {
        self.index = 0;
        for c in self.children.iter_mut() {
            c.abort();
        }
    }
}

impl<C: 'static> BtNode<C> for Selector<C> {
    fn update(&mut self, time: &TickContext, context: &mut C) -> AiResult<BtStatus> {
        while self.index < self.children.len() {
            let status = self.children[self.index].tick(time, context)?;
            match status {
                BtStatus::Running => return Ok(BtStatus::Running),
                BtStatus::Success => return Ok(BtStatus::Success),
                BtStatus::Failure => self.index += 1,
            }
        }
        Ok(BtStatus::Failure)
    }

    fn on_start(&mut self) {
        self.reset();
    }

    fn on_end(&mut self) {
        self.reset();
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Composite
    }
}

impl<C: 'static> Tagged for Selector<C> {
    fn tag() -> NodeTag {
        NodeTag::new("Selector", NodeCategory::Composite).with_param("children", ParamKind::Node)
    }
}

/// At the start of each run, pick the child with the highest `utility()` (earliest on ties) and
/// report whatever that child reports. Fails when there are no children.
pub struct UtilitySelector<C: 'static> {
    children: Vec<Behavior<C>>,
    chosen: Option<usize>,
}

impl<C: 'static> UtilitySelector<C> {
    pub fn new(children: Vec<Box<dyn BtNode<C>>>) -> Self {
        Self {
            children: children.into_iter().map(Behavior::from_box).collect(),
            chosen: None,
        }
    }

    pub fn chosen(&self) -> Option<usize> {
        self.chosen
    }

    fn pick(&self) -> Option<usize> {
        let mut best_idx = None;
        let mut best_utility = f32::NEG_INFINITY;
        for (i, child) in self.children.iter().enumerate() {
            let utility = child.utility();
            if best_idx.is_none() || utility > best_utility {
                best_utility = utility;
                best_idx = Some(i);
            }
        }
        best_idx
    }
}

impl<C: 'static> BtNode<C> for UtilitySelector<C> {
    fn update(&mut self, time: &TickContext, context: &mut C) -> AiResult<BtStatus> {
        if self.chosen.is_none() {
            self.chosen = self.pick();
        }
        let Some(idx) = self.chosen else {
            return Ok(BtStatus::Failure);
        };
        self.children[idx].tick(time, context)
    }

    fn on_start(&mut self) {
        self.chosen = None;
    }

    fn on_end(&mut self) {
        if let Some(idx) = self.chosen.take() {
            self.children[idx].abort();
        }
    }

    /// Utility of the child a new run would pick; `0.0` with no children.
    fn utility(&self) -> f32 {
        self.pick()
            .map(|idx| self.children[idx].utility())
            .unwrap_or(0.0)
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Composite
    }
}

impl<C: 'static> Tagged for UtilitySelector<C> {
    fn tag() -> NodeTag {
        NodeTag::new("UtilitySelector", NodeCategory::Composite)
            .with_param("children", ParamKind::Node)
    }
}

/// Condition evaluated against a read-only context.
///
/// Wrap in [`ConditionNode`] to place it in a tree. A conditional can only answer yes or no, so
/// the resulting node never reports `Running`.
pub trait Conditional<C>: 'static {
    fn check(&mut self, time: &TickContext, context: &C) -> AiResult<bool>;
}

pub struct ConditionNode<T> {
    conditional: T,
}

impl<T> ConditionNode<T> {
    pub fn new(conditional: T) -> Self {
        Self { conditional }
    }

    pub fn inner(&self) -> &T {
        &self.conditional
    }
}

impl<C: 'static, T: Conditional<C>> BtNode<C> for ConditionNode<T> {
    fn update(&mut self, time: &TickContext, context: &mut C) -> AiResult<BtStatus> {
        let ok = self.conditional.check(time, &*context)?;
        Ok(BtStatus::from_bool(ok))
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Conditional
    }
}

impl<T: Tagged> Tagged for ConditionNode<T> {
    fn tag() -> NodeTag {
        T::tag()
    }
}

/// Closure conditional.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }

    /// Shortcut for `ConditionNode::new(Condition::new(cond))`.
    pub fn node(cond: F) -> ConditionNode<Self> {
        ConditionNode::new(Self::new(cond))
    }
}

impl<C, F> Conditional<C> for Condition<F>
where
    F: FnMut(&TickContext, &C) -> bool + 'static,
{
    fn check(&mut self, time: &TickContext, context: &C) -> AiResult<bool> {
        Ok((self.cond)(time, context))
    }
}

impl<F> Tagged for Condition<F> {
    fn tag() -> NodeTag {
        NodeTag::new("Condition", NodeCategory::Conditional)
            .with_param("predicate", ParamKind::Function)
    }
}

const RANDOM_CONDITIONAL_STREAM: u64 = 1;

/// Passes when a fresh uniform sample exceeds `threshold`. One sample per check, no memory.
pub struct RandomConditional {
    threshold: f32,
    rng: Box<dyn RandomSource>,
}

impl RandomConditional {
    pub fn new(threshold: f32, seed: u64) -> Self {
        Self::with_source(threshold, SplitMix64::new(seed))
    }

    /// Seeded from `global_seed` and `agent_id`, so agents sharing a global seed still draw
    /// independent samples.
    pub fn for_agent(threshold: f32, global_seed: u64, agent_id: u64) -> Self {
        Self::new(threshold, derive_seed(global_seed, agent_id, RANDOM_CONDITIONAL_STREAM))
    }

    pub fn with_source(threshold: f32, source: impl RandomSource + 'static) -> Self {
        Self {
            threshold,
            rng: Box::new(source),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl<C> Conditional<C> for RandomConditional {
    fn check(&mut self, _time: &TickContext, _context: &C) -> AiResult<bool> {
        Ok(self.rng.next_unit_f32() > self.threshold)
    }
}

impl Tagged for RandomConditional {
    fn tag() -> NodeTag {
        NodeTag::new("RandomConditional", NodeCategory::Conditional)
            .with_param("threshold", ParamKind::Float)
    }
}

type ActionFn<C> = Box<dyn FnMut(&TickContext, &mut C) -> BtStatus>;

/// Leaf that runs a closure. Ticking it with no closure attached is a precondition error.
pub struct ExecuteAction<C: 'static> {
    action: Option<ActionFn<C>>,
}

impl<C: 'static> ExecuteAction<C> {
    pub fn new(action: impl FnMut(&TickContext, &mut C) -> BtStatus + 'static) -> Self {
        Self {
            action: Some(Box::new(action)),
        }
    }

    /// An action with no closure yet; attach one with [`ExecuteAction::set_action`].
    pub fn empty() -> Self {
        Self { action: None }
    }

    pub fn set_action(&mut self, action: impl FnMut(&TickContext, &mut C) -> BtStatus + 'static) {
        self.action = Some(Box::new(action));
    }
}

impl<C: 'static> BtNode<C> for ExecuteAction<C> {
    fn update(&mut self, time: &TickContext, context: &mut C) -> AiResult<BtStatus> {
        let Some(action) = self.action.as_mut() else {
            return Err(diagnostics::report(AiError::precondition(
                "ExecuteAction ticked without an action",
            )));
        };
        Ok(action(time, context))
    }
}

impl<C: 'static> Tagged for ExecuteAction<C> {
    fn tag() -> NodeTag {
        NodeTag::new("ExecuteAction", NodeCategory::Action)
            .with_param("action", ParamKind::Function)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Normal,
    Error,
}

/// Debugging leaf: logs its message and succeeds.
#[derive(Debug, Clone)]
pub struct LogAction {
    text: String,
    level: LogLevel,
}

impl LogAction {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: LogLevel::Normal,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: LogLevel::Error,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl<C: 'static> BtNode<C> for LogAction {
    fn update(&mut self, time: &TickContext, _context: &mut C) -> AiResult<BtStatus> {
        match self.level {
            LogLevel::Normal => tracing::info!(tick = time.tick, "{}", self.text),
            LogLevel::Error => tracing::error!(tick = time.tick, "{}", self.text),
        }
        Ok(BtStatus::Success)
    }
}

impl Tagged for LogAction {
    fn tag() -> NodeTag {
        NodeTag::new("LogAction", NodeCategory::Action)
            .with_param("text", ParamKind::Text)
            .with_param("is_error", ParamKind::Bool)
    }
}

/// Reports `Running` until `duration` seconds of elapsed time have passed since the run began.
///
/// The start time is captured on the first `update` after `on_start`, with `0.0` meaning "not
/// captured yet". A run whose first update lands exactly at elapsed time zero therefore
/// re-captures its start time on the following update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitAction {
    duration: f32,
    start_time: f32,
}

impl WaitAction {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            start_time: 0.0,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

impl<C: 'static> BtNode<C> for WaitAction {
    fn update(&mut self, time: &TickContext, _context: &mut C) -> AiResult<BtStatus> {
        // TODO: replace the zero sentinel with Option<f32> once the start-at-zero behavior is settled.
        if self.start_time == 0.0 {
            self.start_time = time.elapsed_seconds;
        }

        if time.elapsed_seconds - self.start_time >= self.duration {
            Ok(BtStatus::Success)
        } else {
            Ok(BtStatus::Running)
        }
    }

    fn on_start(&mut self) {
        self.start_time = 0.0;
    }
}

impl Tagged for WaitAction {
    fn tag() -> NodeTag {
        NodeTag::new("WaitAction", NodeCategory::Action).with_param("duration", ParamKind::Float)
    }
}

/// Leaf that gives another agent (usually a whole tree) one full tick, then reports `Success`.
///
/// The child's own status is not visible to the parent.
pub struct SubtreeReference {
    agent: Box<dyn Agent>,
}

impl SubtreeReference {
    pub fn new(agent: impl Agent) -> Self {
        Self {
            agent: Box::new(agent),
        }
    }

    pub fn from_box(agent: Box<dyn Agent>) -> Self {
        Self { agent }
    }
}

impl<C: 'static> BtNode<C> for SubtreeReference {
    fn update(&mut self, time: &TickContext, _context: &mut C) -> AiResult<BtStatus> {
        self.agent.tick(time)?;
        Ok(BtStatus::Success)
    }

    fn kind(&self) -> NodeKind {
        NodeKind::SubtreeReference
    }
}

impl Tagged for SubtreeReference {
    fn tag() -> NodeTag {
        NodeTag::new("SubtreeReference", NodeCategory::Subtree).with_param("tree", ParamKind::Node)
    }
}
