//! Content-addressed table of shared style values
//!
//! Every style category is interned here so that structurally equal values are
//! emitted once and referenced by id from each node that uses them.

use super::builders::{EffectsStyle, NormalizedPaint, SimplifiedLayout, StrokeStyle, TextStyle};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

pub const TEXT_STYLE_PREFIX: &str = "style";
pub const FILL_PREFIX: &str = "fill";
pub const STROKE_PREFIX: &str = "stroke";
pub const EFFECT_PREFIX: &str = "effect";
pub const LAYOUT_PREFIX: &str = "layout";

/// 36^6, the number of distinct six-character suffixes
const SUFFIX_SPACE: u64 = 2_176_782_336;
/// Coprime with 36, so `n * SUFFIX_STRIDE mod SUFFIX_SPACE` is a bijection
const SUFFIX_STRIDE: u64 = 1_000_003;
const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Any value that can live in the table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(TextStyle),
    Fills(Vec<NormalizedPaint>),
    Stroke(StrokeStyle),
    Effects(EffectsStyle),
    Layout(SimplifiedLayout),
}

impl StyleValue {
    fn variant(&self) -> &'static str {
        match self {
            StyleValue::Text(_) => "text",
            StyleValue::Fills(_) => "fills",
            StyleValue::Stroke(_) => "stroke",
            StyleValue::Effects(_) => "effects",
            StyleValue::Layout(_) => "layout",
        }
    }

    /// Canonical lookup key: variant plus serialized content
    ///
    /// Derived serializers emit fields in declaration order, so equal values
    /// always produce equal keys.
    fn lookup_key(&self) -> Option<String> {
        let body = serde_json::to_string(self).ok()?;
        Some(format!("{}:{}", self.variant(), body))
    }
}

impl From<TextStyle> for StyleValue {
    fn from(value: TextStyle) -> Self {
        StyleValue::Text(value)
    }
}

impl From<Vec<NormalizedPaint>> for StyleValue {
    fn from(value: Vec<NormalizedPaint>) -> Self {
        StyleValue::Fills(value)
    }
}

impl From<StrokeStyle> for StyleValue {
    fn from(value: StrokeStyle) -> Self {
        StyleValue::Stroke(value)
    }
}

impl From<EffectsStyle> for StyleValue {
    fn from(value: EffectsStyle) -> Self {
        StyleValue::Effects(value)
    }
}

impl From<SimplifiedLayout> for StyleValue {
    fn from(value: SimplifiedLayout) -> Self {
        StyleValue::Layout(value)
    }
}

/// Interning table shared by one tree walk
///
/// Serializes as `{"styles": {id: value, ...}}` in insertion order. Not meant
/// to be shared between concurrent walks: each walk owns its table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalVars {
    styles: IndexMap<String, StyleValue>,
    /// Lookup key of every entry to its id
    #[serde(skip)]
    index: HashMap<String, String>,
    #[serde(skip)]
    counter: u64,
}

impl GlobalVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of an entry deep-equal to `value`, inserting it under a
    /// fresh `prefix`-scoped id if there is none
    ///
    /// An existing match leaves the table untouched.
    pub fn intern_or_create(&mut self, value: impl Into<StyleValue>, prefix: &str) -> String {
        let value = value.into();
        let key = value.lookup_key();

        let existing = match &key {
            Some(key) => self.index.get(key).cloned(),
            None => self
                .styles
                .iter()
                .find(|(_, existing)| **existing == value)
                .map(|(id, _)| id.clone()),
        };
        if let Some(id) = existing {
            return id;
        }

        let id = loop {
            let candidate = format!("{}-{}", prefix, self.next_suffix());
            if !self.styles.contains_key(&candidate) {
                break candidate;
            }
        };
        tracing::debug!(id = %id, "interned new global variable");
        if let Some(key) = key {
            self.index.insert(key, id.clone());
        }
        self.styles.insert(id.clone(), value);
        id
    }

    pub fn get(&self, id: &str) -> Option<&StyleValue> {
        self.styles.get(id)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.styles.iter()
    }

    /// Six opaque base-36 characters, distinct for every call on this table
    fn next_suffix(&mut self) -> String {
        self.counter += 1;
        let mut n = (self.counter % SUFFIX_SPACE) * SUFFIX_STRIDE % SUFFIX_SPACE;
        let mut suffix = [b'0'; 6];
        for slot in suffix.iter_mut().rev() {
            *slot = SUFFIX_ALPHABET[(n % 36) as usize];
            n /= 36;
        }
        suffix.iter().map(|b| *b as char).collect()
    }
}
