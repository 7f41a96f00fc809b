// SPDX-License-Identifier: MPL-2.0
//! Product and variant data consumed by the gallery.
//!
//! The product payload is external data the gallery only reads: a JSON
//! document describing the purchasable variants and their image sets.
//! Parse failures are reported as [`crate::error::Error::Product`]; the
//! gallery swallows them at the transition boundary and keeps its previous
//! state.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a purchasable product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(u64);

impl VariantId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a selectable option value (e.g. one color swatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionValueId(u64);

impl OptionValueId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Identifier of a media item (one gallery image), shared between slides
/// and their thumbnails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(String);

impl MediaId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product payload
// =============================================================================

/// One selected option value attached to a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    pub id: OptionValueId,
}

/// A purchasable product configuration, optionally carrying its own image set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub option_values: Vec<OptionValue>,
}

impl Variant {
    /// Returns `true` if this variant's option values contain every one of
    /// the given selected ids.
    #[must_use]
    pub fn matches_selection(&self, selected: &[OptionValueId]) -> bool {
        selected
            .iter()
            .all(|id| self.option_values.iter().any(|value| value.id == *id))
    }
}

/// The embedded product payload: the list of variants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Parses the embedded JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Looks up a variant by id.
    #[must_use]
    pub fn variant(&self, id: VariantId) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.id == id)
    }

    /// Finds the variant whose option values contain every selected id.
    ///
    /// Returns `None` when the selection is empty or no variant matches.
    #[must_use]
    pub fn variant_matching(&self, selected: &[OptionValueId]) -> Option<&Variant> {
        if selected.is_empty() {
            return None;
        }
        self.variants
            .iter()
            .find(|variant| variant.matches_selection(selected))
    }
}

/// Normalizes protocol-relative image URLs (`//cdn/...`) to secure URLs.
#[must_use]
pub fn normalize_image_url(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        url.to_string()
    }
}
