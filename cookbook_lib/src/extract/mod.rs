//! Tagged-field extraction from model replies.
//!
//! Models are instructed to answer with `<name>value</name>` markers inside
//! arbitrary prose. Extraction takes the first such pair for each requested
//! name; it does not validate XML, support nesting, or look past the first
//! occurrence.

use std::collections::{BTreeMap, HashMap};
use regex::Regex;
use serde::Serialize;


/// Extracted field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Enclosed text as found.
    Text(String),
    /// Enclosed text split by a list parser.
    List(Vec<String>),
}

impl FieldValue {
    /// Text value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// List value, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::List(l) => Some(l),
        }
    }

    /// Empty text or empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(l) => l.is_empty(),
        }
    }
}

/// Requested field name to extracted value.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Post-processing applied to the raw enclosed text of one field.
pub type FieldParser = fn(&str) -> FieldValue;

/// Field extractor with optional per-field parsers.
///
/// Tag patterns of fields named in [`Extractor::with_fields`] or
/// [`Extractor::with_parser`] are compiled once and reused by every
/// [`Extractor::extract`] call; other fields are compiled per call.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    parsers: HashMap<String, FieldParser>,
    patterns: HashMap<String, Regex>,
}

impl Extractor {

    /// Extractor binding every field as text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Precompile tag patterns for `fields`.
    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        for field in fields {
            self.cache_pattern(field);
        }
        self
    }

    /// Parse the value of `field` with `parser` instead of binding it as text.
    pub fn with_parser(mut self, field: &str, parser: FieldParser) -> Self {
        self.cache_pattern(field);
        self.parsers.insert(field.to_owned(), parser);
        self
    }

    /// Field has a precompiled pattern.
    pub fn is_compiled(&self, field: &str) -> bool {
        self.patterns.contains_key(field)
    }

    /// Extract `fields` from `raw`.
    ///
    /// The result holds exactly the requested names. Fields without a tag get
    /// the empty string, run through their parser if one is registered.
    pub fn extract(&self, raw: &str, fields: &[&str]) -> FieldMap {
        let mut result = FieldMap::new();

        for field in fields {
            let value = match self.patterns.get(*field) {
                Some(re) => find_tag(re, raw),
                None => tag_pattern(field).and_then(|re| find_tag(&re, raw)),
            }.unwrap_or("");

            let value = match self.parsers.get(*field) {
                Some(parser) => parser(value),
                None => FieldValue::Text(value.to_owned()),
            };
            result.insert((*field).to_owned(), value);
        }

        result
    }

    fn cache_pattern(&mut self, field: &str) {
        if self.patterns.contains_key(field) {
            return;
        }
        if let Some(re) = tag_pattern(field) {
            self.patterns.insert(field.to_owned(), re);
        }
    }
}

/// Extract `fields` from `raw`, binding every value as text.
pub fn extract_fields(raw: &str, fields: &[&str]) -> FieldMap {
    Extractor::new().extract(raw, fields)
}

/// Parse `"[a, b, c]"` into a list of trimmed items.
///
/// Brackets are optional; blank input gives an empty list.
pub fn split_list(value: &str) -> FieldValue {
    let inner = value.trim().trim_matches(['[', ']']);
    if inner.trim().is_empty() {
        return FieldValue::List(vec![]);
    }
    FieldValue::List(inner.split(',').map(|item| item.trim().to_owned()).collect())
}

// Non-greedy, single line, case-sensitive.
fn tag_pattern(name: &str) -> Option<Regex> {
    let name = regex::escape(name);
    Regex::new(&format!("<{name}>(.+?)</{name}>")).ok()
}

fn find_tag<'a>(re: &Regex, raw: &'a str) -> Option<&'a str> {
    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
