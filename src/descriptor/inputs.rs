// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::{HelperDescriptor, InputKind};
use crate::errors::InputError;
use crate::grammar::{self, conditional_list, ConditionalList};
use crate::node::Node;

/// A recognized attribute value after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Flag(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    List(Vec<String>),
    Pairs(Vec<(String, String)>),
    Choice(String),
    Conditional(ConditionalList),
    Json(serde_json::Value),
    Instant(DateTime<Utc>),
}

fn parse_value(kind: InputKind, raw: &str) -> Option<InputValue> {
    match kind {
        InputKind::Flag => grammar::parse_flag(raw).map(InputValue::Flag),
        InputKind::Integer => grammar::parse_integer(raw).map(InputValue::Integer),
        InputKind::Number => grammar::parse_number(raw).map(InputValue::Number),
        InputKind::Text => {
            let text = raw.trim();
            (!text.is_empty()).then(|| InputValue::Text(text.to_string()))
        }
        InputKind::List(delimiter) => grammar::parse_list(raw, delimiter).map(InputValue::List),
        InputKind::Pairs => grammar::parse_pairs(raw).map(InputValue::Pairs),
        InputKind::Choice(options) => {
            let wanted = raw.trim().to_ascii_lowercase();
            options
                .iter()
                .find(|option| **option == wanted)
                .map(|option| InputValue::Choice(option.to_string()))
        }
        InputKind::Conditional => Some(InputValue::Conditional(conditional_list::parse(raw))),
        InputKind::Json => serde_json::from_str(raw).ok().map(InputValue::Json),
        InputKind::Instant => grammar::parse_instant(raw).map(InputValue::Instant),
    }
}

/// Typed view over a node's recognized attributes.
///
/// Values that failed their grammar are absent here and listed in
/// [`ParsedInputs::rejected`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInputs {
    values: HashMap<&'static str, InputValue>,
    rejected: Vec<InputError>,
}

impl ParsedInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: InputValue) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.values.get(name)
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(InputValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(InputValue::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(InputValue::Number(n)) => Some(*n),
            Some(InputValue::Integer(n)) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(InputValue::Text(s)) | Some(InputValue::Choice(s)) => Some(s),
            _ => None,
        }
    }

    pub fn list(&self, name: &str) -> Option<&[String]> {
        match self.get(name) {
            Some(InputValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn pairs(&self, name: &str) -> Option<&[(String, String)]> {
        match self.get(name) {
            Some(InputValue::Pairs(pairs)) => Some(pairs),
            _ => None,
        }
    }

    pub fn choice(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(InputValue::Choice(s)) => Some(s),
            _ => None,
        }
    }

    pub fn conditional(&self, name: &str) -> Option<&ConditionalList> {
        match self.get(name) {
            Some(InputValue::Conditional(list)) => Some(list),
            _ => None,
        }
    }

    pub fn json(&self, name: &str) -> Option<&serde_json::Value> {
        match self.get(name) {
            Some(InputValue::Json(value)) => Some(value),
            _ => None,
        }
    }

    pub fn instant(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.get(name) {
            Some(InputValue::Instant(dt)) => Some(*dt),
            _ => None,
        }
    }

    pub fn rejected(&self) -> &[InputError] {
        &self.rejected
    }
}

/// Parse every recognized attribute present on `node`.
///
/// Absent attributes are simply missing. A value that does not fit its
/// grammar is recorded as rejected and otherwise treated as absent. Skipped
/// segments of a conditional list are recorded too, although the rest of the
/// list still applies.
pub fn parse_inputs(descriptor: &HelperDescriptor, node: &Node) -> ParsedInputs {
    let mut inputs = ParsedInputs::new();

    for spec in &descriptor.recognized {
        let Some(raw) = node.attributes.get(spec.name) else {
            continue;
        };

        match parse_value(spec.kind, raw) {
            Some(InputValue::Conditional(list)) => {
                for segment in &list.malformed {
                    inputs.rejected.push(InputError::Unparseable {
                        attribute: spec.name.to_string(),
                        value: segment.clone(),
                        expected: spec.kind.expected(),
                    });
                }
                inputs.insert(spec.name, InputValue::Conditional(list));
            }
            Some(value) => inputs.insert(spec.name, value),
            None => inputs.rejected.push(InputError::Unparseable {
                attribute: spec.name.to_string(),
                value: raw.to_string(),
                expected: spec.kind.expected(),
            }),
        }
    }

    inputs
}
