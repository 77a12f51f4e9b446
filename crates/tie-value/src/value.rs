//! Value — the dynamic value tree.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Insertion-ordered key/value container.
pub type Mapping = IndexMap<String, Value>;

static UNDEFINED: Value = Value::Undefined;

/// Reads `key` from a mapping, treating a missing key as [`Value::Undefined`].
#[inline]
pub fn lookup<'a>(map: &'a Mapping, key: &str) -> &'a Value {
    map.get(key).unwrap_or(&UNDEFINED)
}

/// A reference to a callable, identified by its textual representation.
///
/// Cloning shares the underlying text. Two references compare equal iff their
/// text is identical, so two functions that behave the same but are written
/// differently are not equal.
#[derive(Debug, Clone)]
pub struct FunctionRef {
    source: Arc<str>,
}

impl FunctionRef {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns `true` if both references share the same allocation.
    pub fn ptr_eq(&self, other: &FunctionRef) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}

impl PartialEq for FunctionRef {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for FunctionRef {}

impl fmt::Display for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Runtime type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    Function,
    Sequence,
    Mapping,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Function => "function",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        }
    }

    /// Mappings and sequences.
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Sequence | ValueKind::Mapping)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamic value.
///
/// The derived `PartialEq` is structural: numbers use IEEE equality
/// (`NaN != NaN`), functions compare by text and mappings ignore key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Function(FunctionRef),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    pub fn function(source: impl Into<Arc<str>>) -> Self {
        Value::Function(FunctionRef::new(source))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Function(_) => ValueKind::Function,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
        }
    }

    /// Falsiness in the usual dynamic-language sense: `undefined`, `null`,
    /// `false`, `0`, `NaN` and `""` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Function(_) | Value::Sequence(_) | Value::Mapping(_) => true,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Member access; anything that is not a mapping has no members.
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Value::Mapping(map) => lookup(map, key),
            _ => &UNDEFINED,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<FunctionRef> for Value {
    fn from(f: FunctionRef) -> Self {
        Value::Function(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Value::Undefined.kind(), ValueKind::Undefined);
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from(1).kind(), ValueKind::Number);
        assert_eq!(Value::from("a").kind(), ValueKind::String);
        assert_eq!(Value::function("x => x").kind(), ValueKind::Function);
        assert_eq!(Value::Sequence(vec![]).kind(), ValueKind::Sequence);
        assert_eq!(Value::from(Mapping::new()).kind(), ValueKind::Mapping);
    }

    #[test]
    fn truthiness_matrix() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(-0.0).is_truthy());
        assert!(!Value::from(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());

        assert!(Value::from(true).is_truthy());
        assert!(Value::from(-1).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::Sequence(vec![]).is_truthy());
        assert!(Value::from(Mapping::new()).is_truthy());
        assert!(Value::function("").is_truthy());
    }

    #[test]
    fn function_refs_compare_by_text() {
        let a = FunctionRef::new("function () { return 1; }");
        let b = FunctionRef::new(String::from("function () { return 1; }"));
        let c = FunctionRef::new("function () {return 1;}");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
    }

    #[test]
    fn lookup_defaults_to_undefined() {
        let mut map = Mapping::new();
        map.insert("a".into(), Value::from(1));
        assert_eq!(lookup(&map, "a"), &Value::from(1));
        assert!(lookup(&map, "b").is_undefined());
        assert!(Value::from(1).get("a").is_undefined());
    }

    #[test]
    fn kind_names() {
        assert_eq!(ValueKind::Mapping.to_string(), "mapping");
        assert!(ValueKind::Sequence.is_container());
        assert!(!ValueKind::Function.is_container());
    }
}
