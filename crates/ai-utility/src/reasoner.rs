use ai_tools::{NodeCategory, NodeTag, Tagged};

use crate::{Consideration, UtilityAction};

/// Outcome of a selection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Default,
    Consideration(usize),
}

/// Picks one consideration for the current context. Stateless between calls.
pub trait SelectionStrategy<C: 'static>: 'static {
    fn choose(
        &self,
        context: &C,
        considerations: &[Consideration<C>],
        default: &Consideration<C>,
    ) -> Choice;
}

/// First consideration, in registration order, scoring at least the default score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstScore;

impl<C: 'static> SelectionStrategy<C> for FirstScore {
    fn choose(
        &self,
        context: &C,
        considerations: &[Consideration<C>],
        default: &Consideration<C>,
    ) -> Choice {
        let default_score = default.score(context);
        considerations
            .iter()
            .position(|c| c.score(context) >= default_score)
            .map(Choice::Consideration)
            .unwrap_or(Choice::Default)
    }
}

impl Tagged for FirstScore {
    fn tag() -> NodeTag {
        NodeTag::new("FirstScore", NodeCategory::Reasoner)
    }
}

/// Consideration with the strictly highest score; the default wins every tie with it, and the
/// earliest consideration wins ties among the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighestScore;

impl<C: 'static> SelectionStrategy<C> for HighestScore {
    fn choose(
        &self,
        context: &C,
        considerations: &[Consideration<C>],
        default: &Consideration<C>,
    ) -> Choice {
        let mut best = Choice::Default;
        let mut best_score = default.score(context);
        for (i, c) in considerations.iter().enumerate() {
            let score = c.score(context);
            if score > best_score {
                best_score = score;
                best = Choice::Consideration(i);
            }
        }
        best
    }
}

impl Tagged for HighestScore {
    fn tag() -> NodeTag {
        NodeTag::new("HighestScore", NodeCategory::Reasoner)
    }
}

/// Ordered considerations, a default fallback, and the strategy choosing between them.
pub struct Reasoner<C: 'static> {
    considerations: Vec<Consideration<C>>,
    default: Consideration<C>,
    strategy: Box<dyn SelectionStrategy<C>>,
}

impl<C: 'static> Reasoner<C> {
    pub fn new(strategy: impl SelectionStrategy<C>) -> Self {
        Self {
            considerations: Vec::new(),
            default: Consideration::default(),
            strategy: Box::new(strategy),
        }
    }

    pub fn first_score() -> Self {
        Self::new(FirstScore)
    }

    pub fn highest_score() -> Self {
        Self::new(HighestScore)
    }

    pub fn with_consideration(mut self, consideration: Consideration<C>) -> Self {
        self.add_consideration(consideration);
        self
    }

    pub fn with_default_consideration(mut self, consideration: Consideration<C>) -> Self {
        self.set_default_consideration(consideration);
        self
    }

    pub fn add_consideration(&mut self, consideration: Consideration<C>) {
        self.considerations.push(consideration);
    }

    pub fn set_default_consideration(&mut self, consideration: Consideration<C>) {
        self.default = consideration;
    }

    pub fn considerations(&self) -> &[Consideration<C>] {
        &self.considerations
    }

    pub fn default_consideration(&self) -> &Consideration<C> {
        &self.default
    }

    pub fn consideration(&self, choice: Choice) -> Option<&Consideration<C>> {
        match choice {
            Choice::Default => Some(&self.default),
            Choice::Consideration(i) => self.considerations.get(i),
        }
    }

    pub fn choose(&self, context: &C) -> Choice {
        self.strategy
            .choose(context, &self.considerations, &self.default)
    }

    /// Action of the chosen consideration, if it has one.
    pub fn select(&mut self, context: &C) -> Option<&mut dyn UtilityAction<C>> {
        let choice = self.choose(context);
        let chosen = match choice {
            Choice::Default => &mut self.default,
            Choice::Consideration(i) => self.considerations.get_mut(i)?,
        };
        tracing::debug!(?choice, consideration = chosen.name(), "reasoner selected");
        chosen.action_mut()
    }
}
