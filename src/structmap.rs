//! Mapping of parsed values onto caller-supplied typed structures.
//!
//! A [`StructMapper`] is a type-erased constructor for one target type,
//! built once with [`StructMapper::of`] and stored in the configuration.
//! Mapping applies to map-shaped values (one instance) and to sequences of
//! map-shaped values (one instance per element, order preserving); any
//! other shape is skipped rather than treated as an error.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::Error;

/// A constructed struct instance, type-erased for storage in
/// [`Payload`](crate::outcome::Payload). Downcast back with
/// [`downcast_ref`](dyn StructValue::downcast_ref).
pub trait StructValue: Any + fmt::Debug + Send {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug + Send> StructValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn StructValue {
    /// Recovers the concrete type this instance was constructed as.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Outcome of a mapping attempt.
#[derive(Debug)]
pub enum Mapped {
    /// A map-shaped value produced one instance.
    One(Box<dyn StructValue>),
    /// A sequence of map-shaped values produced one instance each.
    Many(Vec<Box<dyn StructValue>>),
    /// The value was neither map- nor sequence-shaped; mapping was skipped
    /// and the value is handed back unchanged.
    Skipped(Value),
}

/// Type-erased constructor for a configured target type.
#[derive(Clone)]
pub struct StructMapper {
    type_name: &'static str,
    build: Arc<dyn Fn(&Value) -> Result<Box<dyn StructValue>, Error> + Send + Sync>,
}

impl fmt::Debug for StructMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructMapper").field("type", &self.type_name).finish()
    }
}

impl StructMapper {
    /// Builds a mapper that constructs `T` from map-shaped values.
    pub fn of<T>() -> Self
    where
        T: DeserializeOwned + fmt::Debug + Send + 'static,
    {
        StructMapper {
            type_name: std::any::type_name::<T>(),
            build: Arc::new(|value: &Value| {
                let instance: T = serde_json::from_value(value.clone())
                    .map_err(|e| Error::Struct(e.to_string()))?;
                Ok(Box::new(instance) as Box<dyn StructValue>)
            }),
        }
    }

    /// Name of the target type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Maps `value` onto the target type per the shape rules above.
    pub fn map(&self, value: Value) -> Result<Mapped, Error> {
        match value {
            Value::Object(_) => Ok(Mapped::One((self.build)(&value)?)),
            Value::Array(items) => {
                let mut instances = Vec::with_capacity(items.len());
                for item in &items {
                    if !item.is_object() {
                        return Err(Error::Struct(format!(
                            "expected a map-shaped element for {}, got {item}",
                            self.type_name
                        )));
                    }
                    instances.push((self.build)(item)?);
                }
                Ok(Mapped::Many(instances))
            }
            other => Ok(Mapped::Skipped(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: i64,
        name: String,
    }

    #[test]
    fn map_shaped_value_builds_one_instance() {
        let mapper = StructMapper::of::<User>();
        match mapper.map(json!({"id": 1, "name": "John"})).unwrap() {
            Mapped::One(instance) => {
                let user = instance.downcast_ref::<User>().unwrap();
                assert_eq!(user, &User { id: 1, name: "John".into() });
            }
            other => panic!("expected One, got {other:?}"),
        }
    }

    #[test]
    fn sequence_builds_one_instance_per_element_in_order() {
        let mapper = StructMapper::of::<User>();
        let value = json!([{"id": 1, "name": "John"}, {"id": 2, "name": "Doe"}]);
        match mapper.map(value).unwrap() {
            Mapped::Many(instances) => {
                assert_eq!(instances.len(), 2);
                assert_eq!(instances[0].downcast_ref::<User>().unwrap().name, "John");
                assert_eq!(instances[1].downcast_ref::<User>().unwrap().name, "Doe");
            }
            other => panic!("expected Many, got {other:?}"),
        }
    }

    #[test]
    fn scalar_value_is_skipped_not_an_error() {
        let mapper = StructMapper::of::<User>();
        match mapper.map(json!("John")).unwrap() {
            Mapped::Skipped(value) => assert_eq!(value, json!("John")),
            other => panic!("expected Skipped, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_fields_are_a_struct_error() {
        let mapper = StructMapper::of::<User>();
        // id is a string in the first element
        let value = json!([{"id": "1", "name": "John"}, {"id": 2, "name": "Doe"}]);
        assert!(matches!(mapper.map(value), Err(Error::Struct(_))));
    }

    #[test]
    fn non_map_sequence_element_is_a_struct_error() {
        let mapper = StructMapper::of::<User>();
        let value = json!([{"id": 1, "name": "John"}, 42]);
        assert!(matches!(mapper.map(value), Err(Error::Struct(_))));
    }

    #[test]
    fn missing_field_is_a_struct_error() {
        let mapper = StructMapper::of::<User>();
        assert!(matches!(mapper.map(json!({"id": 1})), Err(Error::Struct(_))));
    }
}
