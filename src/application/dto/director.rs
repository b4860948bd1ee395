use serde::Serialize;

use crate::domain::entities::Director;

/// Director as shown in list items: id and name only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorSummary {
    pub id: i32,
    pub name: String,
}

impl From<&Director> for DirectorSummary {
    fn from(director: &Director) -> Self {
        DirectorSummary {
            id: director.id,
            name: director.name.clone(),
        }
    }
}

/// Extended profile used by the movie detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorDetail {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<i32>,
    pub description: Option<String>,
}

impl From<&Director> for DirectorDetail {
    fn from(director: &Director) -> Self {
        DirectorDetail {
            id: director.id,
            name: director.name.clone(),
            birth_year: director.birth_year,
            description: director.description.clone(),
        }
    }
}
