use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One line of a conversation log.
///
/// Only the fields the merge reads or rewrites are typed, and none of them
/// is required here: summary and snapshot lines carry none of them. Every
/// other key lands in `extra` and is written back untouched.
///
/// Each typed field remembers whether its key was absent (`None`) or an
/// explicit null (`Some(None)`), so both survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    uuid: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    session_id: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    parent_uuid: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Record {
    /// A root message record with an explicit null `parentUuid`.
    pub fn new(uuid: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            uuid: Some(Some(uuid.into())),
            session_id: Some(Some(session_id.into())),
            parent_uuid: Some(None),
            extra: Map::new(),
        }
    }

    pub fn with_parent(mut self, parent_uuid: impl Into<String>) -> Self {
        self.set_parent_uuid(parent_uuid);
        self
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_ref().and_then(|u| u.as_deref())
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_ref().and_then(|s| s.as_deref())
    }

    pub fn parent_uuid(&self) -> Option<&str> {
        self.parent_uuid.as_ref().and_then(|p| p.as_deref())
    }

    pub fn set_parent_uuid(&mut self, parent_uuid: impl Into<String>) {
        self.parent_uuid = Some(Some(parent_uuid.into()));
    }

    /// A root record has a null or missing `parentUuid`.
    pub fn is_root(&self) -> bool {
        self.parent_uuid().is_none()
    }

    /// Copy of this record moved into another session. Adds `sessionId`
    /// when the record had none.
    pub fn with_session_id(&self, session_id: &str) -> Self {
        Self {
            session_id: Some(Some(session_id.to_string())),
            ..self.clone()
        }
    }
}
