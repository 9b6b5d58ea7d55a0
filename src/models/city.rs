use serde::Deserialize;

/// A city as known to the myQuran schedule API: an opaque id plus a
/// display name. Deserialized straight from the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct City {
    pub id: String,
    #[serde(rename = "lokasi")]
    pub name: String,
}

impl City {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
