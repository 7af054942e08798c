use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::schema::{ObjectReader, Schema, ValidationError};

const NAME_MIN_LEN: usize = 1;
const GENERATED_KEYS: &[&str] = &["id"];

/// A task exactly as stored, `id` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub done: bool,
}

/// Fields accepted when creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewTask {
    #[schema(min_length = 1)]
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

/// Fields accepted when updating a task. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(min_length = 1)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.done.is_none()
    }
}

impl Schema for NewTask {
    fn parse(value: &Value) -> Result<Self, ValidationError> {
        let mut reader = ObjectReader::new(value)?;
        let name = reader.required_string("name", NAME_MIN_LEN);
        let done = reader.boolean("done");
        reader.forbid(GENERATED_KEYS);
        reader.finish()?;
        Ok(Self {
            // finish() fails whenever the required name was not read
            name: name.unwrap_or_default(),
            done: done.unwrap_or(false),
        })
    }
}

impl Schema for TaskPatch {
    fn parse(value: &Value) -> Result<Self, ValidationError> {
        let mut reader = ObjectReader::new(value)?;
        let name = reader.string("name", NAME_MIN_LEN);
        let done = reader.boolean("done");
        reader.forbid(GENERATED_KEYS);
        reader.finish()?;
        Ok(Self { name, done })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::IssueCode;
    use serde_json::json;

    #[test]
    fn insert_defaults_done_to_false() {
        let task = NewTask::parse(&json!({ "name": "write docs" })).unwrap();
        assert_eq!(task.name, "write docs");
        assert!(!task.done);
    }

    #[test]
    fn insert_requires_name() {
        let err = NewTask::parse(&json!({ "done": false })).unwrap_err();
        assert_eq!(err.issues[0].path, vec!["name"]);
        assert_eq!(err.issues[0].code, IssueCode::InvalidType);
        assert_eq!(err.issues[0].message, "Required");
    }

    #[test]
    fn insert_rejects_empty_name() {
        let err = NewTask::parse(&json!({ "name": "" })).unwrap_err();
        assert_eq!(err.issues[0].code, IssueCode::TooSmall);
    }

    #[test]
    fn insert_rejects_generated_id() {
        let err = NewTask::parse(&json!({ "id": 7, "name": "x" })).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].code, IssueCode::UnrecognizedKeys);
        assert_eq!(err.issues[0].keys, Some(vec!["id".to_string()]));
    }

    #[test]
    fn insert_reports_issues_in_field_order() {
        let err = NewTask::parse(&json!({ "id": 1, "done": "yes", "name": 3 })).unwrap_err();
        let paths = err
            .issues
            .iter()
            .map(|issue| issue.path.join("."))
            .collect::<Vec<_>>();
        assert_eq!(paths, vec!["name", "done", ""]);
        assert_eq!(err.issues[0].message, "Expected string, received number");
        assert_eq!(err.issues[1].message, "Expected boolean, received string");
    }

    #[test]
    fn insert_ignores_unknown_keys() {
        let task = NewTask::parse(&json!({ "name": "a", "colour": "red" })).unwrap();
        assert_eq!(task, NewTask { name: "a".into(), done: false });
    }

    #[test]
    fn patch_accepts_empty_object() {
        let patch = TaskPatch::parse(&json!({})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_accepts_subset() {
        let patch = TaskPatch::parse(&json!({ "done": true })).unwrap();
        assert_eq!(patch, TaskPatch { name: None, done: Some(true) });
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_rejects_null_name() {
        let err = TaskPatch::parse(&json!({ "name": null })).unwrap_err();
        assert_eq!(err.issues[0].message, "Expected string, received null");
    }
}
