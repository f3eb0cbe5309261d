//! Scene elements and the version fingerprint used for change detection.
//!
//! Elements are kept as opaque JSON objects. This crate only reads the handful
//! of fields it needs (`id`, `type`, `version`, `isDeleted`); everything else
//! round-trips untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Integer fingerprint of a scene's content.
///
/// Equal versions mean "nothing changed" for the purpose of skipping writes.
/// It is never used to order or merge scenes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SceneVersion(u64);

impl SceneVersion {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SceneVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SceneVersion {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single drawable element on the whiteboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneElement(Map<String, Value>);

impl SceneElement {
    /// Build a minimal element. Mostly useful for fixtures.
    pub fn new(id: impl Into<String>, element_type: impl Into<String>, version: u64) -> Self {
        let mut fields = Map::new();
        fields.insert("id".into(), Value::String(id.into()));
        fields.insert("type".into(), Value::String(element_type.into()));
        fields.insert("version".into(), Value::from(version));
        fields.insert("versionNonce".into(), Value::from(0));
        fields.insert("isDeleted".into(), Value::Bool(false));
        Self(fields)
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn element_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Per-element edit counter. Missing or non-integer values count as 0.
    pub fn version(&self) -> u64 {
        self.0.get("version").and_then(Value::as_u64).unwrap_or(0)
    }

    pub fn is_deleted(&self) -> bool {
        self.0
            .get("isDeleted")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

/// Sum of every element's `version`, deleted elements included.
///
/// Any edit bumps an element's version, so the sum changes whenever the
/// scene does. Saturates instead of wrapping.
pub fn scene_version(elements: &[SceneElement]) -> SceneVersion {
    let total = elements
        .iter()
        .fold(0u64, |acc, element| acc.saturating_add(element.version()));
    SceneVersion(total)
}

/// Normalize raw element records loaded from storage.
///
/// Records that are not objects, or lack a non-empty string `id` or a string
/// `type`, are dropped. Missing bookkeeping fields get their defaults.
pub fn restore_elements(raw: Vec<Value>) -> Vec<SceneElement> {
    raw.into_iter().filter_map(restore_element).collect()
}

fn restore_element(raw: Value) -> Option<SceneElement> {
    let Value::Object(mut fields) = raw else {
        return None;
    };

    let has_id = fields
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| !id.is_empty());
    let has_type = fields.get("type").is_some_and(Value::is_string);
    if !has_id || !has_type {
        return None;
    }

    if !fields.get("version").is_some_and(Value::is_u64) {
        fields.insert("version".into(), Value::from(1));
    }
    if !fields.get("versionNonce").is_some_and(Value::is_number) {
        fields.insert("versionNonce".into(), Value::from(0));
    }
    if !fields.get("isDeleted").is_some_and(Value::is_boolean) {
        fields.insert("isDeleted".into(), Value::Bool(false));
    }

    Some(SceneElement(fields))
}

/// Payload written to a room's scene document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument<'a> {
    pub scene_version: SceneVersion,
    pub data: &'a [SceneElement],
}

/// Scene document as returned by the backend.
///
/// `data` stays raw so malformed records can be repaired before use.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSceneDocument {
    #[serde(default)]
    pub scene_version: Option<SceneVersion>,
    #[serde(default)]
    pub data: Vec<Value>,
}
