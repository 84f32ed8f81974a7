//! Small mutable builder over `serde_json` values.
//!
//! Mappers receive builders rather than raw values so that they can address a
//! field (possibly nested), set it, or append to it without caring whether it
//! already exists.

use serde_json::{Map, Value};

/// Mutable JSON object under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObjectBuilder {
    object: Map<String, Value>,
}

impl JsonObjectBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Address top-level field `name`, creating it as `null` if missing.
    pub fn field(&mut self, name: &str) -> FieldBuilder<'_> {
        let slot = self
            .object
            .entry(name.to_string())
            .or_insert(Value::Null);
        FieldBuilder { slot }
    }

    /// Address `name` inside the object found by following `parents`.
    ///
    /// Missing intermediate objects are created; an intermediate value that
    /// is not an object is replaced by one.
    pub fn nested_field(&mut self, parents: &[&str], name: &str) -> FieldBuilder<'_> {
        let Some((first, rest)) = parents.split_first() else {
            return self.field(name);
        };

        let mut slot = self
            .object
            .entry((*first).to_string())
            .or_insert(Value::Null);
        for parent in rest {
            slot = child(slot, parent);
        }
        FieldBuilder {
            slot: child(slot, name),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.object.get(name)
    }

    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.object.get(name).and_then(Value::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.object.is_empty()
    }

    /// Snapshot of the object built so far.
    #[must_use]
    pub fn build(&self) -> Value {
        Value::Object(self.object.clone())
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.object)
    }
}

/// Child `name` of `slot`, turning `slot` into an object first if needed.
fn child<'v>(slot: &'v mut Value, name: &str) -> &'v mut Value {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    // IndexMut on an object inserts `null` for a missing key
    &mut slot[name]
}

/// Handle on one field of a [`JsonObjectBuilder`].
pub struct FieldBuilder<'a> {
    slot: &'a mut Value,
}

impl<'a> FieldBuilder<'a> {
    pub fn string_value(self, value: impl Into<String>) {
        *self.slot = Value::String(value.into());
    }

    pub fn bool_value(self, value: bool) {
        *self.slot = Value::Bool(value);
    }

    pub fn value(self, value: Value) {
        *self.slot = value;
    }

    /// Set the field to the current content of `builder`.
    pub fn object_value(self, builder: &JsonObjectBuilder) {
        *self.slot = builder.build();
    }

    /// Address the field as an array, replacing any non-array value.
    pub fn array_value(self) -> ArrayBuilder<'a> {
        if !self.slot.is_array() {
            *self.slot = Value::Array(Vec::new());
        }
        ArrayBuilder { slot: self.slot }
    }
}

/// Handle on an array field of a [`JsonObjectBuilder`].
pub struct ArrayBuilder<'a> {
    slot: &'a mut Value,
}

impl ArrayBuilder<'_> {
    pub fn add(&mut self, value: Value) -> &mut Self {
        if let Value::Array(items) = self.slot {
            items.push(value);
        }
        self
    }

    pub fn add_string(&mut self, value: impl Into<String>) -> &mut Self {
        self.add(Value::String(value.into()))
    }

    pub fn add_builder(&mut self, builder: &JsonObjectBuilder) -> &mut Self {
        self.add(builder.build())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slot.as_array().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
