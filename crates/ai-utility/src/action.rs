use ai_core::{diagnostics::report, AiError, AiResult};
use ai_tools::{NodeCategory, NodeTag, ParamKind, Tagged};

use crate::{OptionAppraisal, Reasoner};

/// Something a consideration runs once it has been chosen.
pub trait UtilityAction<C>: 'static {
    fn execute(&mut self, context: &mut C) -> AiResult<()>;
}

type ActionFn<C> = Box<dyn FnMut(&mut C)>;

/// Closure action. Executing it before a closure is attached is a precondition failure.
pub struct FnAction<C: 'static> {
    action: Option<ActionFn<C>>,
}

impl<C: 'static> FnAction<C> {
    pub fn new(action: impl FnMut(&mut C) + 'static) -> Self {
        Self {
            action: Some(Box::new(action)),
        }
    }

    pub fn empty() -> Self {
        Self { action: None }
    }

    pub fn set_action(&mut self, action: impl FnMut(&mut C) + 'static) {
        self.action = Some(Box::new(action));
    }
}

impl<C: 'static> UtilityAction<C> for FnAction<C> {
    fn execute(&mut self, context: &mut C) -> AiResult<()> {
        let Some(action) = self.action.as_mut() else {
            return Err(report(AiError::precondition(
                "FnAction executed without an action",
            )));
        };
        action(context);
        Ok(())
    }
}

impl<C: 'static> Tagged for FnAction<C> {
    fn tag() -> NodeTag {
        NodeTag::new("FnAction", NodeCategory::UtilityAction)
            .with_param("action", ParamKind::Function)
    }
}

/// Runs every child in order. A failing child stops the run and its error is returned.
pub struct CompositeAction<C: 'static> {
    actions: Vec<Box<dyn UtilityAction<C>>>,
}

impl<C: 'static> CompositeAction<C> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: impl UtilityAction<C>) -> Self {
        self.add_action(action);
        self
    }

    pub fn add_action(&mut self, action: impl UtilityAction<C>) {
        self.actions.push(Box::new(action));
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<C: 'static> Default for CompositeAction<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static> UtilityAction<C> for CompositeAction<C> {
    fn execute(&mut self, context: &mut C) -> AiResult<()> {
        for action in &mut self.actions {
            action.execute(context)?;
        }
        Ok(())
    }
}

impl<C: 'static> Tagged for CompositeAction<C> {
    fn tag() -> NodeTag {
        NodeTag::new("CompositeAction", NodeCategory::UtilityAction)
            .with_param("actions", ParamKind::Node)
    }
}

/// Scores a list of options with summed appraisals and hands the best one to a handler.
///
/// Ties keep the earliest option. An empty option list does nothing.
pub struct ActionWithOptions<C: 'static, O: 'static> {
    options: Vec<O>,
    appraisals: Vec<Box<dyn OptionAppraisal<C, O>>>,
    handler: Box<dyn FnMut(&mut C, &O)>,
}

impl<C: 'static, O: 'static> ActionWithOptions<C, O> {
    pub fn new(handler: impl FnMut(&mut C, &O) + 'static) -> Self {
        Self {
            options: Vec::new(),
            appraisals: Vec::new(),
            handler: Box::new(handler),
        }
    }

    pub fn with_options(mut self, options: Vec<O>) -> Self {
        self.options = options;
        self
    }

    pub fn with_appraisal(mut self, appraisal: impl OptionAppraisal<C, O>) -> Self {
        self.add_appraisal(appraisal);
        self
    }

    pub fn add_appraisal(&mut self, appraisal: impl OptionAppraisal<C, O>) {
        self.appraisals.push(Box::new(appraisal));
    }

    pub fn set_options(&mut self, options: Vec<O>) {
        self.options = options;
    }

    pub fn options(&self) -> &[O] {
        &self.options
    }

    pub fn score_option(&self, context: &C, option: &O) -> f32 {
        let score: f32 = self
            .appraisals
            .iter()
            .map(|a| a.score(context, option))
            .sum();
        if score.is_nan() {
            f32::NEG_INFINITY
        } else {
            score
        }
    }

    fn best_index(&self, context: &C) -> Option<usize> {
        let mut best = None;
        let mut best_score = f32::MIN;
        for (i, option) in self.options.iter().enumerate() {
            let score = self.score_option(context, option);
            if best.is_none() || score > best_score {
                best_score = score;
                best = Some(i);
            }
        }
        best
    }

    pub fn best_option(&self, context: &C) -> Option<&O> {
        self.best_index(context).map(|i| &self.options[i])
    }
}

impl<C: 'static, O: 'static> UtilityAction<C> for ActionWithOptions<C, O> {
    fn execute(&mut self, context: &mut C) -> AiResult<()> {
        if let Some(i) = self.best_index(context) {
            (self.handler)(context, &self.options[i]);
        }
        Ok(())
    }
}

impl<C: 'static, O: 'static> Tagged for ActionWithOptions<C, O> {
    fn tag() -> NodeTag {
        NodeTag::new("ActionWithOptions", NodeCategory::UtilityAction)
            .with_param("appraisals", ParamKind::Function)
            .with_param("handler", ParamKind::Function)
    }
}

/// Runs a nested reasoner: select, then execute the chosen action if there is one.
pub struct ReasonerAction<C: 'static> {
    reasoner: Reasoner<C>,
}

impl<C: 'static> ReasonerAction<C> {
    pub fn new(reasoner: Reasoner<C>) -> Self {
        Self { reasoner }
    }

    pub fn reasoner(&self) -> &Reasoner<C> {
        &self.reasoner
    }
}

impl<C: 'static> UtilityAction<C> for ReasonerAction<C> {
    fn execute(&mut self, context: &mut C) -> AiResult<()> {
        match self.reasoner.select(context) {
            Some(action) => action.execute(context),
            None => Ok(()),
        }
    }
}

impl<C: 'static> Tagged for ReasonerAction<C> {
    fn tag() -> NodeTag {
        NodeTag::new("ReasonerAction", NodeCategory::UtilityAction)
            .with_param("reasoner", ParamKind::Node)
    }
}
