#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeCategory {
    Action,
    Conditional,
    Task,
    Subtree,
    Composite,
    Appraisal,
    UtilityAction,
    Reasoner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamKind {
    Bool,
    Int,
    Float,
    Text,
    /// A child node or nested tree.
    Node,
    /// A callable supplied in code.
    Function,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParamTag {
    pub name: Cow<'static, str>,
    pub kind: ParamKind,
}

/// Declarative description of a node type: a name plus its parameters, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeTag {
    pub name: Cow<'static, str>,
    pub category: NodeCategory,
    pub params: Vec<ParamTag>,
}

impl NodeTag {
    pub fn new(name: impl Into<Cow<'static, str>>, category: NodeCategory) -> Self {
        Self {
            name: name.into(),
            category,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<Cow<'static, str>>, kind: ParamKind) -> Self {
        self.params.push(ParamTag {
            name: name.into(),
            kind,
        });
        self
    }

    pub fn param(&self, name: &str) -> Option<&ParamTag> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Implemented by node/action types that want to show up in authoring tools.
pub trait Tagged {
    fn tag() -> NodeTag
    where
        Self: Sized;
}

/// Ordered collection of tags exported to tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagCatalog {
    pub tags: Vec<NodeTag>,
}

impl TagCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Tagged>(&mut self) -> &mut Self {
        self.insert(T::tag())
    }

    /// Add `tag`. A tag with the same name is replaced where it stands.
    pub fn insert(&mut self, tag: NodeTag) -> &mut Self {
        match self.tags.iter_mut().find(|t| t.name == tag.name) {
            Some(existing) => *existing = tag,
            None => self.tags.push(tag),
        }
        self
    }

    /// Insert every tag of `other`, in order.
    pub fn merge(&mut self, other: TagCatalog) -> &mut Self {
        for tag in other.tags {
            self.insert(tag);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&NodeTag> {
        self.tags.iter().find(|t| t.name == name)
    }

    pub fn by_category(&self, category: NodeCategory) -> impl Iterator<Item = &NodeTag> {
        self.tags.iter().filter(move |t| t.category == category)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
