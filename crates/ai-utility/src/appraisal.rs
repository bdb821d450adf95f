use ai_tools::{NodeCategory, NodeTag, ParamKind, Tagged};

/// Pure scoring function over a context.
pub trait Appraisal<C>: 'static {
    fn score(&self, context: &C) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAppraisal(pub f32);

impl<C> Appraisal<C> for FixedAppraisal {
    fn score(&self, _context: &C) -> f32 {
        self.0
    }
}

impl Tagged for FixedAppraisal {
    fn tag() -> NodeTag {
        NodeTag::new("FixedAppraisal", NodeCategory::Appraisal).with_param("score", ParamKind::Float)
    }
}

/// Closure appraisal.
pub struct FnAppraisal<F> {
    score_fn: F,
}

impl<F> FnAppraisal<F> {
    pub fn new(score_fn: F) -> Self {
        Self { score_fn }
    }
}

impl<C, F> Appraisal<C> for FnAppraisal<F>
where
    F: Fn(&C) -> f32 + 'static,
{
    fn score(&self, context: &C) -> f32 {
        (self.score_fn)(context)
    }
}

impl<F> Tagged for FnAppraisal<F> {
    fn tag() -> NodeTag {
        NodeTag::new("FnAppraisal", NodeCategory::Appraisal)
            .with_param("score", ParamKind::Function)
    }
}

/// Scores one candidate option against the context; used by `ActionWithOptions`.
pub trait OptionAppraisal<C, O>: 'static {
    fn score(&self, context: &C, option: &O) -> f32;
}

impl<C, O, F> OptionAppraisal<C, O> for F
where
    F: Fn(&C, &O) -> f32 + 'static,
{
    fn score(&self, context: &C, option: &O) -> f32 {
        self(context, option)
    }
}
