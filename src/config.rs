//! Visualization configuration model
//!
//! `ScalarValue` is the closed set of value shapes that can travel into a
//! generated cell as a source-code literal. `VisArgs` is the closed set of
//! recognized visualization parameters with their baseline defaults; the
//! notebook maker diffs per-stream settings against a baseline so generated
//! cells only name what the user actually changed.

use crate::notebook::error::{NotebookError, Result};

/// A scalar configuration value renderable as a source-code literal
///
/// Containers are deliberately unrepresentable: a value that is not one of
/// these shapes is rejected at the ingestion boundary, not stringified.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Parameter left unset (renders as `None`)
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ScalarValue {
    /// Render as literal source text
    ///
    /// Generated cells are Python source, so booleans render as
    /// `True`/`False` and absent values as `None`; re-evaluating the emitted
    /// literal in the notebook runtime reproduces the original value.
    pub fn to_literal(&self) -> String {
        match self {
            ScalarValue::Absent => "None".to_string(),
            ScalarValue::Bool(true) => "True".to_string(),
            ScalarValue::Bool(false) => "False".to_string(),
            ScalarValue::Int(i) => i.to_string(),
            ScalarValue::Float(f) => f.to_string(),
            ScalarValue::Str(s) => {
                format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Bool(v)
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        ScalarValue::Int(v)
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Float(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::Str(v.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        ScalarValue::Str(v)
    }
}

/// `None` maps to `Absent`
impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ScalarValue::Absent, Into::into)
    }
}

/// Ingestion from JSON-shaped stream requests
///
/// Fails loudly on arrays and objects: only scalars have a defined literal
/// rendering.
impl TryFrom<&serde_json::Value> for ScalarValue {
    type Error = NotebookError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(ScalarValue::Absent),
            Value::Bool(b) => Ok(ScalarValue::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ScalarValue::Int(i))
                } else {
                    n.as_f64().map(ScalarValue::Float).ok_or_else(|| {
                        NotebookError::UnsupportedValue(format!("non-finite number: {n}"))
                    })
                }
            }
            Value::String(s) => Ok(ScalarValue::Str(s.clone())),
            Value::Array(_) => Err(NotebookError::UnsupportedValue(
                "array values have no literal rendering".to_string(),
            )),
            Value::Object(_) => Err(NotebookError::UnsupportedValue(
                "object values have no literal rendering".to_string(),
            )),
        }
    }
}

/// Visualization parameters attached to a stream's display request
///
/// The field set is closed: these are the only parameters the generator
/// recognizes, and their `Default` values form the suppression baseline for
/// diffing. Declaration order is the order parameters appear in generated
/// cells.
#[derive(Debug, Clone, PartialEq)]
pub struct VisArgs {
    /// Chart type, e.g. "line", "histogram" (None = renderer default)
    pub vis_type: Option<String>,

    /// Title shown above the rendered visualization
    pub title: Option<String>,

    /// Clear rendered points when the stream ends
    pub clear_after_end: bool,

    /// Clear rendered points before each update
    pub clear_after_each: bool,

    /// Number of updates kept visible
    pub history_len: u32,

    /// Dim older updates instead of removing them
    pub dim_history: bool,

    /// Mark opacity in [0,1] (None = renderer default)
    pub opacity: Option<f64>,

    /// Grid rows when one host displays multiple visualizations
    pub rows: u32,

    /// Grid columns when one host displays multiple visualizations
    pub cols: u32,

    /// Render width in pixels (None = renderer default)
    pub width: Option<u32>,

    /// Render height in pixels (None = renderer default)
    pub height: Option<u32>,
}

impl Default for VisArgs {
    fn default() -> Self {
        VisArgs {
            vis_type: None,
            title: None,
            clear_after_end: false,
            clear_after_each: false,
            history_len: 1,
            dim_history: true,
            opacity: None,
            rows: 2,
            cols: 5,
            width: None,
            height: None,
        }
    }
}

impl VisArgs {
    /// Enumerate the closed parameter set in declaration order
    pub fn params(&self) -> Vec<(&'static str, ScalarValue)> {
        vec![
            ("vis_type", self.vis_type.clone().into()),
            ("title", self.title.clone().into()),
            ("clear_after_end", self.clear_after_end.into()),
            ("clear_after_each", self.clear_after_each.into()),
            ("history_len", i64::from(self.history_len).into()),
            ("dim_history", self.dim_history.into()),
            ("opacity", self.opacity.into()),
            ("rows", i64::from(self.rows).into()),
            ("cols", i64::from(self.cols).into()),
            ("width", self.width.map(i64::from).into()),
            ("height", self.height.map(i64::from).into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_literal_is_quoted() {
        assert_eq!(ScalarValue::from("line").to_literal(), "'line'");
    }

    #[test]
    fn test_string_literal_escapes_quotes() {
        assert_eq!(ScalarValue::from("it's").to_literal(), "'it\\'s'");
        assert_eq!(ScalarValue::from("a\\b").to_literal(), "'a\\\\b'");
    }

    #[test]
    fn test_numeric_and_bool_literals() {
        assert_eq!(ScalarValue::Int(42).to_literal(), "42");
        assert_eq!(ScalarValue::Int(-7).to_literal(), "-7");
        assert_eq!(ScalarValue::Float(0.5).to_literal(), "0.5");
        assert_eq!(ScalarValue::Bool(true).to_literal(), "True");
        assert_eq!(ScalarValue::Bool(false).to_literal(), "False");
        assert_eq!(ScalarValue::Absent.to_literal(), "None");
    }

    #[test]
    fn test_option_maps_to_absent() {
        let none: Option<String> = None;
        assert_eq!(ScalarValue::from(none), ScalarValue::Absent);
        assert_eq!(
            ScalarValue::from(Some("x".to_string())),
            ScalarValue::Str("x".to_string())
        );
    }

    #[test]
    fn test_json_scalars_convert() {
        assert_eq!(
            ScalarValue::try_from(&json!(null)).unwrap(),
            ScalarValue::Absent
        );
        assert_eq!(
            ScalarValue::try_from(&json!(true)).unwrap(),
            ScalarValue::Bool(true)
        );
        assert_eq!(
            ScalarValue::try_from(&json!(3)).unwrap(),
            ScalarValue::Int(3)
        );
        assert_eq!(
            ScalarValue::try_from(&json!(2.5)).unwrap(),
            ScalarValue::Float(2.5)
        );
        assert_eq!(
            ScalarValue::try_from(&json!("hi")).unwrap(),
            ScalarValue::Str("hi".to_string())
        );
    }

    #[test]
    fn test_json_containers_rejected() {
        assert!(ScalarValue::try_from(&json!([1, 2])).is_err());
        assert!(ScalarValue::try_from(&json!({"a": 1})).is_err());
    }

    #[test]
    fn test_default_baseline_values() {
        let d = VisArgs::default();
        assert_eq!(d.vis_type, None);
        assert_eq!(d.history_len, 1);
        assert!(d.dim_history);
        assert!(!d.clear_after_end);
        assert_eq!(d.rows, 2);
        assert_eq!(d.cols, 5);
    }

    #[test]
    fn test_params_order_is_stable() {
        let names: Vec<&str> = VisArgs::default()
            .params()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec![
                "vis_type",
                "title",
                "clear_after_end",
                "clear_after_each",
                "history_len",
                "dim_history",
                "opacity",
                "rows",
                "cols",
                "width",
                "height",
            ]
        );
    }
}
