use std::borrow::Cow;

use crate::{Appraisal, UtilityAction};

/// How a consideration folds its appraisal scores into one score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aggregate {
    /// Constant score; appraisals are ignored.
    Fixed(f32),
    /// Sum of all appraisals.
    Sum,
    /// Sum appraisals in order, stopping at the first one below the threshold (its score and
    /// everything after it are left out).
    Threshold(f32),
    /// Sum of all appraisals, or `0.0` if any of them is below the threshold.
    AllOrNothing(f32),
}

/// A scored candidate for a [`crate::Reasoner`]: appraisals, an aggregation rule, and the action
/// to run when chosen.
pub struct Consideration<C: 'static> {
    name: Cow<'static, str>,
    aggregate: Aggregate,
    appraisals: Vec<Box<dyn Appraisal<C>>>,
    action: Option<Box<dyn UtilityAction<C>>>,
}

impl<C: 'static> Consideration<C> {
    pub fn new(aggregate: Aggregate) -> Self {
        Self {
            name: Cow::Borrowed(""),
            aggregate,
            appraisals: Vec::new(),
            action: None,
        }
    }

    pub fn fixed(score: f32) -> Self {
        Self::new(Aggregate::Fixed(score))
    }

    pub fn sum_of_children() -> Self {
        Self::new(Aggregate::Sum)
    }

    pub fn threshold(threshold: f32) -> Self {
        Self::new(Aggregate::Threshold(threshold))
    }

    pub fn all_or_nothing(threshold: f32) -> Self {
        Self::new(Aggregate::AllOrNothing(threshold))
    }

    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_appraisal(mut self, appraisal: impl Appraisal<C>) -> Self {
        self.add_appraisal(appraisal);
        self
    }

    pub fn with_action(mut self, action: impl UtilityAction<C>) -> Self {
        self.set_action(action);
        self
    }

    pub fn add_appraisal(&mut self, appraisal: impl Appraisal<C>) {
        self.appraisals.push(Box::new(appraisal));
    }

    pub fn set_action(&mut self, action: impl UtilityAction<C>) {
        self.action = Some(Box::new(action));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aggregate(&self) -> Aggregate {
        self.aggregate
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn action_mut(&mut self) -> Option<&mut dyn UtilityAction<C>> {
        let action: &mut dyn UtilityAction<C> = self.action.as_deref_mut()?;
        Some(action)
    }

    /// Aggregated score. NaN, from an appraisal or from the aggregation itself, counts as
    /// negative infinity so it can never win.
    pub fn score(&self, context: &C) -> f32 {
        let scores = self.appraisals.iter().map(|a| nan_to_neg_inf(a.score(context)));
        nan_to_neg_inf(self.aggregate_scores(scores))
    }

    fn aggregate_scores(&self, scores: impl Iterator<Item = f32>) -> f32 {
        match self.aggregate {
            Aggregate::Fixed(score) => score,
            Aggregate::Sum => scores.sum(),
            Aggregate::Threshold(threshold) => {
                let mut sum = 0.0;
                for s in scores {
                    if s < threshold {
                        break;
                    }
                    sum += s;
                }
                sum
            }
            Aggregate::AllOrNothing(threshold) => {
                let mut sum = 0.0;
                for s in scores {
                    if s < threshold {
                        return 0.0;
                    }
                    sum += s;
                }
                sum
            }
        }
    }
}

fn nan_to_neg_inf(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}

impl<C: 'static> Default for Consideration<C> {
    /// The fallback every reasoner starts with: a fixed score of `1.0` and no action.
    fn default() -> Self {
        Self::fixed(1.0).with_name("default")
    }
}
