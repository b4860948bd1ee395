use serde::{Deserialize, Serialize};

/// Read-only reference data; movies hold a required foreign key to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<i32>,
    pub description: Option<String>,
}
