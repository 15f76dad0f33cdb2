//! Maps collection keys such as `"assignments/assignment"` to record factories,
//! so a generic loader can build typed records from raw server data.
//!
//! There is no process-wide instance. Build one with [`bootstrap`] at startup
//! and pass it to whatever needs to look records up.

use crate::assignment::Assignment;
use crate::error::{ModelError, ModelResult};
use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

pub trait CollectionElement: fmt::Debug + fmt::Display + Send + Sync {
    fn collection(&self) -> &'static str;
    fn id(&self) -> Option<i64>;
    fn to_json(&self) -> ModelResult<Value>;
    fn as_any(&self) -> &dyn Any;
}

pub type Factory = fn(&Value) -> ModelResult<Box<dyn CollectionElement>>;

#[derive(Debug, Default)]
pub struct CollectionRegistry {
    factories: BTreeMap<&'static str, Factory>,
}

impl CollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: &'static str, factory: Factory) -> ModelResult<()> {
        if self.factories.contains_key(key) {
            return Err(ModelError::DuplicateCollection(key.to_string()));
        }
        self.factories.insert(key, factory);
        debug!(collection = key, "registered collection");
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    pub fn build(&self, key: &str, raw: &Value) -> ModelResult<Box<dyn CollectionElement>> {
        let factory = self
            .factories
            .get(key)
            .ok_or_else(|| ModelError::UnknownCollection(key.to_string()))?;
        factory(raw)
    }

    /// Builds every record in `raw`, which may be a single object or an array
    /// of objects. Any element that fails to build fails the whole batch.
    pub fn build_many(
        &self,
        key: &str,
        raw: &Value,
    ) -> ModelResult<Vec<Box<dyn CollectionElement>>> {
        let (&key, &factory) = self
            .factories
            .get_key_value(key)
            .ok_or_else(|| ModelError::UnknownCollection(key.to_string()))?;
        let Value::Array(items) = raw else {
            return Ok(vec![factory(raw)?]);
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                factory(item).map_err(|source| ModelError::Nested {
                    field: key,
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }
}

/// Registry with every record type of this crate registered.
pub fn bootstrap() -> ModelResult<CollectionRegistry> {
    let mut registry = CollectionRegistry::new();
    Assignment::register(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = bootstrap().unwrap();
        let err = Assignment::register(&mut registry).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateCollection(ref key) if key == Assignment::COLLECTION));
        assert_eq!(registry.keys().count(), 1);
    }

    #[test]
    fn unknown_collection_is_an_error() {
        let registry = bootstrap().unwrap();
        let err = registry.build("motions/motion", &json!({})).unwrap_err();
        assert!(matches!(err, ModelError::UnknownCollection(ref key) if key == "motions/motion"));
    }
}
