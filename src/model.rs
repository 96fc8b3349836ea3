use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Records that can be looked up by their display name.
pub trait Named {
    const KIND: &'static str;

    fn name(&self) -> &str;
}

/// Accept identifiers sent either as JSON strings or numbers.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Workspace {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub layout: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub memberships: Option<Vec<Value>>,
}

macro_rules! named {
    ($ty:ty, $kind:literal) => {
        impl Named for $ty {
            const KIND: &'static str = $kind;

            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

named!(Workspace, "workspace");
named!(Project, "project");
named!(Section, "section");
named!(Task, "task");

/// `users/me` payload; only the embedded workspace list is used, kept raw.
#[derive(Debug, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub workspaces: Vec<Value>,
}

/// Single-record response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct NextPage {
    pub uri: String,
}

/// One page of a list endpoint.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_page: Option<NextPage>,
}
