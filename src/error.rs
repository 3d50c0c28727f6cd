use thiserror::Error;

/// Structural problems in graph data that cannot be degraded to defaults.
///
/// Missing or mistyped *attributes* never produce an error; only input whose
/// shape makes the data unreadable (a top-level value that is not an object, a
/// list field that is not a list, a record that is not an object) does.
#[derive(Debug, Error)]
pub enum LegendError {
    #[error("graph data must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("`{field}` must be a list, found {found}")]
    NotAList {
        field: &'static str,
        found: &'static str,
    },

    #[error("`{field}` entry {index} must be an object, found {found}")]
    MalformedRecord {
        field: &'static str,
        index: usize,
        found: &'static str,
    },

    #[error("graph data is not valid JSON or JSON5: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, LegendError>;

/// Short type name of a JSON value, used in error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}
