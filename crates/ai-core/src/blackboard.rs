use std::any::{type_name, Any};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::{diagnostics, AiError, AiResult};

/// Anything that can be stored on a [`Blackboard`].
///
/// Blanket-implemented for `PartialEq + Debug + Send + Sync + 'static` types. Equality lets
/// redundant writes be dropped without firing the change callback.
pub trait BlackboardValue: Any + Send + Sync + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn eq_value(&self, other: &dyn Any) -> bool;
}

impl<T> BlackboardValue for T
where
    T: Any + PartialEq + Send + Sync + fmt::Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_value(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| other == self)
    }
}

/// Typed handle for a blackboard entry.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BbKey<T: 'static> {
    name: &'static str,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Copy for BbKey<T> {}

impl<T: 'static> Clone for BbKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> BbKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: PhantomData,
        }
    }

    pub fn name(self) -> &'static str {
        self.name
    }
}

#[derive(Clone)]
struct Entry {
    type_name: &'static str,
    value: Arc<dyn BlackboardValue>,
}

impl Entry {
    fn new<T: BlackboardValue>(value: T) -> Self {
        Self {
            type_name: type_name::<T>(),
            value: Arc::new(value),
        }
    }

    fn value(&self) -> &dyn BlackboardValue {
        &*self.value
    }
}

pub type ChangeCallback = Box<dyn FnMut(&str) + Send>;

/// String-keyed store of typed values shared by trees, reasoners and sensors.
///
/// Each key remembers the type it was written with. Reading it back as another type is a
/// [`AiError::TypeMismatch`]; reading a missing key yields the type's default.
#[derive(Default)]
pub struct Blackboard {
    values: BTreeMap<String, Entry>,
    on_change: Option<ChangeCallback>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Remove every entry. The change callback is kept.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Remove `key`, returning whether it was present. Removal does not fire the change callback.
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    /// Install the change callback, replacing any previous one.
    pub fn on_change(&mut self, callback: impl FnMut(&str) + Send + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Write `value` under `key`.
    ///
    /// Writing an equal value of the same type is a no-op and does not notify. Anything else
    /// (new key, new value, or a value of a different type) overwrites and notifies.
    pub fn set<T: BlackboardValue>(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        if let Some(existing) = self.values.get(&key) {
            let candidate: &dyn Any = &value;
            if existing.value().eq_value(candidate) {
                return;
            }
        }

        tracing::trace!(key = %key, ty = type_name::<T>(), "blackboard set");
        self.values.insert(key.clone(), Entry::new(value));
        if let Some(callback) = self.on_change.as_mut() {
            callback(&key);
        }
    }

    /// Read `key` as `T`, or `T::default()` when the key is absent.
    pub fn get<T>(&self, key: &str) -> AiResult<T>
    where
        T: BlackboardValue + Clone + Default,
    {
        Ok(self.get_ref::<T>(key)?.cloned().unwrap_or_default())
    }

    /// Borrow `key` as `T`; `Ok(None)` when the key is absent.
    pub fn get_ref<T: BlackboardValue>(&self, key: &str) -> AiResult<Option<&T>> {
        let Some(entry) = self.values.get(key) else {
            return Ok(None);
        };

        match entry.value().as_any().downcast_ref::<T>() {
            Some(value) => Ok(Some(value)),
            None => Err(diagnostics::report(AiError::TypeMismatch {
                key: key.to_string(),
                expected: type_name::<T>(),
                actual: entry.type_name,
            })),
        }
    }

    pub fn read<T>(&self, key: BbKey<T>) -> AiResult<T>
    where
        T: BlackboardValue + Clone + Default,
    {
        self.get(key.name())
    }

    pub fn write<T: BlackboardValue>(&mut self, key: BbKey<T>, value: T) {
        self.set(key.name(), value);
    }

    /// New blackboard holding this one's entries overlaid with `child`'s (child wins).
    ///
    /// Values are shared with both inputs, not deep-copied. Neither input is modified and the
    /// result starts without a change callback.
    pub fn combine(&self, child: &Blackboard) -> Blackboard {
        let mut values = self.values.clone();
        for (key, entry) in &child.values {
            values.insert(key.clone(), entry.clone());
        }
        Blackboard {
            values,
            on_change: None,
        }
    }
}

impl fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.values.iter().map(|(k, e)| (k, e.value())))
            .finish()
    }
}
