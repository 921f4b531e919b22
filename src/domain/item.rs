use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(id) => write!(f, "{id}"),
            ItemId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentKind {
    News,
    Event,
    Gallery,
    Announcement,
    #[default]
    Text,
    Other,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::News => "news",
            ContentKind::Event => "event",
            ContentKind::Gallery => "gallery",
            ContentKind::Announcement => "announcement",
            ContentKind::Text => "text",
            ContentKind::Other => "other",
        }
    }
}

impl From<&str> for ContentKind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "news" => ContentKind::News,
            "event" => ContentKind::Event,
            "gallery" => ContentKind::Gallery,
            "announcement" => ContentKind::Announcement,
            "text" => ContentKind::Text,
            _ => ContentKind::Other,
        }
    }
}

impl Serialize for ContentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ContentKind::from(raw.as_str()))
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(rename = "type", default)]
    pub kind: ContentKind,
}

impl ContentItem {
    pub fn new(id: impl Into<ItemId>, content: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            id: id.into(),
            content: Some(Value::String(content.into())),
            kind,
        }
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeratedItem {
    pub id: ItemId,
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: ContentKind,
    #[serde(default)]
    pub safety_score: Option<u8>,
    #[serde(default)]
    pub flagged_keywords: Vec<String>,
    #[serde(default)]
    pub version: u32,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_ids_accept_numbers_and_strings() {
        let items: Vec<ContentItem> = serde_json::from_str(
            r#"[{"id": 1, "content": "a", "type": "news"}, {"id": "evt-2", "type": "event"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].id, ItemId::Number(1));
        assert_eq!(items[1].id, ItemId::Text("evt-2".into()));
        assert!(items[1].content.is_none());
        assert_eq!(items[1].kind, ContentKind::Event);
    }

    #[test]
    fn non_string_content_still_deserializes() {
        let items: Vec<ContentItem> = serde_json::from_str(
            r#"[{"id": 1, "content": "berita pondok"}, {"id": 2, "content": 42}, {"id": 3, "content": null}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].content, Some(Value::from(42)));
        assert!(items[2].content.is_none());
        assert_eq!(json_type_name(&Value::from(42)), "number");
    }

    #[test]
    fn unknown_kinds_fall_back_to_other() {
        let item: ContentItem =
            serde_json::from_str(r#"{"id": 3, "content": "x", "type": "podcast"}"#).unwrap();
        assert_eq!(item.kind, ContentKind::Other);
    }
}
