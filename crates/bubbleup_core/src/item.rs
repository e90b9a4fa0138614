use serde::{Deserialize, Serialize};

/// A single row of a reorderable list.
///
/// `key` is what gets rendered, `value` is what gets returned on submission.
/// Both share the element type. Items are never mutated after construction;
/// reordering only moves them around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item<T> {
    key: T,
    value: T,
}

impl<T> Item<T> {
    pub fn new(key: T, value: T) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &T {
        &self.key
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Clone> Item<T> {
    /// Item whose display key and value are the same.
    pub fn same(value: T) -> Self {
        Self {
            key: value.clone(),
            value,
        }
    }
}

impl<T> From<(T, T)> for Item<T> {
    fn from((key, value): (T, T)) -> Self {
        Self::new(key, value)
    }
}
