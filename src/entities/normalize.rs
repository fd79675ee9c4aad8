use super::schema::EntitySchema;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Result of flattening an API response against a schema
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResult {
    /// The response in its original shape
    pub entity: Value,
    /// schema key -> entity id -> flattened entity
    pub entities: HashMap<String, HashMap<String, Value>>,
    /// Id of the single entity, or the list of ids
    pub result: Value,
}

impl NormalizedResult {
    /// Event payload fields: `entity`, `entities`, `result`
    pub fn payload_fields(&self) -> Map<String, Value> {
        let mut entities = Map::new();
        for (key, bucket) in &self.entities {
            let flat: Map<String, Value> = bucket
                .iter()
                .map(|(id, value)| (id.clone(), value.clone()))
                .collect();
            entities.insert(key.clone(), Value::Object(flat));
        }

        let mut fields = Map::new();
        fields.insert("entity".to_string(), self.entity.clone());
        fields.insert("entities".to_string(), Value::Object(entities));
        fields.insert("result".to_string(), self.result.clone());
        fields
    }
}

/// Normalize a single entity or a list of entities against a schema
///
/// Nested relationship objects are replaced by their ids and flattened
/// into their own schema's bucket. An object without its id attribute
/// cannot be keyed and is left in place unflattened.
pub fn normalize(schema: &EntitySchema, data: &Value) -> NormalizedResult {
    let mut entities = HashMap::new();

    let result = match data {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| visit(schema, item, &mut entities))
                .collect(),
        ),
        other => visit(schema, other, &mut entities),
    };

    NormalizedResult {
        entity: data.clone(),
        entities,
        result,
    }
}

fn visit(
    schema: &EntitySchema,
    value: &Value,
    entities: &mut HashMap<String, HashMap<String, Value>>,
) -> Value {
    let Value::Object(object) = value else {
        return value.clone();
    };

    let mut flat = Map::new();
    for (field, field_value) in object {
        match schema.relations().iter().find(|r| &r.field == field) {
            Some(relation) => {
                let replaced = match field_value {
                    Value::Array(items) => Value::Array(
                        items
                            .iter()
                            .map(|item| visit(&relation.schema, item, entities))
                            .collect(),
                    ),
                    other => visit(&relation.schema, other, entities),
                };
                flat.insert(field.clone(), replaced);
            }
            None => {
                flat.insert(field.clone(), field_value.clone());
            }
        }
    }

    let Some(id) = flat.get(schema.id_attribute()).and_then(id_key) else {
        return Value::Object(flat);
    };

    let id_value = flat
        .get(schema.id_attribute())
        .cloned()
        .unwrap_or(Value::String(id.clone()));

    entities
        .entry(schema.key().to_string())
        .or_default()
        .insert(id, Value::Object(flat));

    id_value
}

/// String form of an id for keying the flat map
fn id_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
