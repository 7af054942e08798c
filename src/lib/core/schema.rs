use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub const VALIDATION_ERROR_NAME: &str = "ZodError";
pub const REQUIRED: &str = "Required";
pub const NO_UPDATES: &str = "No updates provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    TooSmall,
    TooBig,
    UnrecognizedKeys,
    InvalidUpdates,
}

/// One problem found while validating a request.
///
/// Field names and messages follow the Zod issue format, so existing
/// clients can keep matching on `code`, `path` and `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Issue {
    pub code: IssueCode,
    pub path: Vec<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
}

impl Issue {
    fn bare(code: IssueCode, path: Vec<String>, message: String) -> Self {
        Self {
            code,
            path,
            message,
            expected: None,
            received: None,
            minimum: None,
            maximum: None,
            kind: None,
            inclusive: None,
            exact: None,
            keys: None,
        }
    }

    pub fn invalid_type(path: &[&str], expected: &str, received: &str) -> Self {
        let message = if received == "undefined" {
            REQUIRED.to_string()
        } else {
            format!("Expected {expected}, received {received}")
        };
        Self {
            expected: Some(expected.to_string()),
            received: Some(received.to_string()),
            ..Self::bare(IssueCode::InvalidType, owned_path(path), message)
        }
    }

    pub fn too_small_string(path: &[&str], minimum: i64) -> Self {
        Self {
            minimum: Some(minimum),
            kind: Some("string".to_string()),
            inclusive: Some(true),
            exact: Some(false),
            ..Self::bare(
                IssueCode::TooSmall,
                owned_path(path),
                format!("String must contain at least {minimum} character(s)"),
            )
        }
    }

    pub fn too_small_number(path: &[&str], minimum: i64) -> Self {
        Self {
            minimum: Some(minimum),
            kind: Some("number".to_string()),
            inclusive: Some(true),
            exact: Some(false),
            ..Self::bare(
                IssueCode::TooSmall,
                owned_path(path),
                format!("Number must be greater than or equal to {minimum}"),
            )
        }
    }

    pub fn too_big_number(path: &[&str], maximum: i64) -> Self {
        Self {
            maximum: Some(maximum),
            kind: Some("number".to_string()),
            inclusive: Some(true),
            exact: Some(false),
            ..Self::bare(
                IssueCode::TooBig,
                owned_path(path),
                format!("Number must be less than or equal to {maximum}"),
            )
        }
    }

    pub fn unrecognized_keys(keys: Vec<String>) -> Self {
        let quoted = keys
            .iter()
            .map(|key| format!("'{key}'"))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            keys: Some(keys),
            ..Self::bare(
                IssueCode::UnrecognizedKeys,
                Vec::new(),
                format!("Unrecognized key(s) in object: {quoted}"),
            )
        }
    }

    pub fn no_updates() -> Self {
        Self::bare(IssueCode::InvalidUpdates, Vec::new(), NO_UPDATES.to_string())
    }
}

fn owned_path(path: &[&str]) -> Vec<String> {
    path.iter().map(|segment| segment.to_string()).collect()
}

/// Non-empty, ordered list of issues produced by a failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    pub issues: Vec<Issue>,
    pub name: String,
}

impl ValidationError {
    pub fn new(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self {
            issues,
            name: VALIDATION_ERROR_NAME.to_string(),
        }
    }

    pub fn single(issue: Issue) -> Self {
        Self::new(vec![issue])
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .issues
            .iter()
            .map(|issue| match issue.path.is_empty() {
                true => issue.message.clone(),
                false => format!("{}: {}", issue.path.join("."), issue.message),
            })
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// The 422 response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorBody {
    pub success: bool,
    pub error: ValidationError,
}

impl From<ValidationError> for ValidationErrorBody {
    fn from(error: ValidationError) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

/// A request shape that can be checked against raw JSON.
pub trait Schema: Sized {
    fn parse(value: &Value) -> Result<Self, ValidationError>;
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

/// Reads typed fields out of a JSON object, recording every issue on the way.
pub(crate) struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
    issues: Vec<Issue>,
}

impl<'a> ObjectReader<'a> {
    pub(crate) fn new(value: &'a Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(object) => Ok(Self {
                object,
                issues: Vec::new(),
            }),
            other => Err(ValidationError::single(Issue::invalid_type(
                &[],
                "object",
                json_type_name(other),
            ))),
        }
    }

    /// Optional string with a minimum length. A missing key is `None`.
    pub(crate) fn string(&mut self, key: &str, min_len: usize) -> Option<String> {
        match self.object.get(key)? {
            Value::String(s) if s.chars().count() >= min_len => Some(s.clone()),
            Value::String(_) => {
                self.issues
                    .push(Issue::too_small_string(&[key], min_len as i64));
                None
            }
            other => {
                self.issues
                    .push(Issue::invalid_type(&[key], "string", json_type_name(other)));
                None
            }
        }
    }

    pub(crate) fn required_string(&mut self, key: &str, min_len: usize) -> Option<String> {
        if !self.object.contains_key(key) {
            self.issues
                .push(Issue::invalid_type(&[key], "string", "undefined"));
            return None;
        }
        self.string(key, min_len)
    }

    pub(crate) fn boolean(&mut self, key: &str) -> Option<bool> {
        match self.object.get(key)? {
            Value::Bool(b) => Some(*b),
            other => {
                self.issues
                    .push(Issue::invalid_type(&[key], "boolean", json_type_name(other)));
                None
            }
        }
    }

    /// Keys the caller must never set, such as storage-generated ids.
    pub(crate) fn forbid(&mut self, keys: &[&str]) {
        let present = keys
            .iter()
            .filter(|key| self.object.contains_key(**key))
            .map(|key| key.to_string())
            .collect::<Vec<_>>();
        if !present.is_empty() {
            self.issues.push(Issue::unrecognized_keys(present));
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        match self.issues.is_empty() {
            true => Ok(()),
            false => Err(ValidationError::new(self.issues)),
        }
    }
}
