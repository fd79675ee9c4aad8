use std::sync::Arc;

/// Descriptor of a REST resource
///
/// Explicit data, not behavior: the unique key, the id attribute, and
/// the relationship fields the normalizer flattens.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    key: String,
    id_attribute: String,
    relations: Vec<Relation>,
}

/// A relationship field pointing at another schema
#[derive(Debug, Clone)]
pub struct Relation {
    pub field: String,
    pub schema: Arc<EntitySchema>,
}

impl EntitySchema {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            id_attribute: "id".to_string(),
            relations: Vec::new(),
        }
    }

    pub fn with_id_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.id_attribute = attribute.into();
        self
    }

    pub fn with_relation(mut self, field: impl Into<String>, schema: Arc<EntitySchema>) -> Self {
        self.relations.push(Relation {
            field: field.into(),
            schema,
        });
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn id_attribute(&self) -> &str {
        &self.id_attribute
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }
}

/// Request/success/failure event names for one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionKeyTriple {
    pub request: String,
    pub success: String,
    pub failure: String,
}

impl ActionKeyTriple {
    fn new(base: String) -> Self {
        Self {
            success: format!("{}_SUCCESS", base),
            failure: format!("{}_FAILURE", base),
            request: base,
        }
    }
}

/// Event names for the four operations, derived once per schema key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionKeys {
    pub get_single: ActionKeyTriple,
    pub create: ActionKeyTriple,
    pub update: ActionKeyTriple,
    pub delete: ActionKeyTriple,
}

impl ActionKeys {
    pub fn for_key(key: &str) -> Self {
        let upper = key.to_uppercase();
        Self {
            get_single: ActionKeyTriple::new(format!("REQUEST_SINGLE_{}", upper)),
            create: ActionKeyTriple::new(format!("CREATE_SINGLE_{}", upper)),
            update: ActionKeyTriple::new(format!("UPDATE_SINGLE_{}", upper)),
            delete: ActionKeyTriple::new(format!("DELETE_SINGLE_{}", upper)),
        }
    }
}
