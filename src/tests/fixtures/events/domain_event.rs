use serde::{Deserialize, Serialize};

/// Minimal event for exercising the generic stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub name: String,
}

impl DomainEvent {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
