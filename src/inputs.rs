// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message input payloads.
//!
//! Parameterized messages take a map of named values that are substituted
//! verbatim into the template (`pdp_stars` takes `count`, `dashboard`
//! greetings take `username`). Values are opaque to the runtime: no plural
//! rules, no locale-aware number formatting, only `Display`.

use std::collections::BTreeMap;

/// One substitution value: the value kinds message call sites pass.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl std::fmt::Display for InputValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputValue::Str(value) => write!(f, "{value}"),
            InputValue::Int(value) => write!(f, "{value}"),
            InputValue::Float(value) => write!(f, "{value}"),
            InputValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Str(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Str(value)
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        InputValue::Int(value)
    }
}

impl From<i32> for InputValue {
    fn from(value: i32) -> Self {
        InputValue::Int(i64::from(value))
    }
}

impl From<u32> for InputValue {
    fn from(value: u32) -> Self {
        InputValue::Int(i64::from(value))
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Float(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Bool(value)
    }
}

/// Named parameters for one accessor call.
///
/// Most messages take none; `MessageInputs::new()` is the empty payload the
/// generated accessors are called with in that case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageInputs {
    values: BTreeMap<String, InputValue>,
}

impl MessageInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// ```
    /// use driplo_messages::inputs::MessageInputs;
    /// let inputs = MessageInputs::new().with("count", 4);
    /// assert_eq!(inputs.len(), 1);
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<InputValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<InputValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
