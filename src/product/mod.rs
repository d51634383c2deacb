//! # Product
//!
//! A marketplace listing (pet or supply) as delivered by the listings provider.
//! Only the fields the filter engine reads are typed; everything else is kept
//! verbatim in [`Product::extra`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod coerce;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use self::coerce::{coerce_date, coerce_number, parse_date, parse_number_prefix};

/// A single listing record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Provider-assigned identifier (not read by the engine)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    /// Display name
    #[serde(
        default,
        deserialize_with = "coerce::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Free-text description
    #[serde(
        default,
        deserialize_with = "coerce::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Breed (pets only)
    #[serde(
        default,
        deserialize_with = "coerce::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub breed: Option<String>,

    /// Marketplace category (e.g. "Pets", "Pet Food")
    #[serde(
        default,
        deserialize_with = "coerce::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,

    /// Price, numeric or numeric-like string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,

    /// Rating, numeric or numeric-like string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Value>,

    /// Seller location
    #[serde(
        default,
        deserialize_with = "coerce::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,

    /// Creation timestamp (preferred date field)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,

    /// Legacy date field, used when `createdAt` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,

    /// Fields the engine does not read, preserved as delivered
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Returns the name, or an empty string when absent
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Returns the description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the breed
    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }

    /// Returns the category
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the location
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the coerced price (`0.0` when absent or malformed)
    pub fn price(&self) -> f64 {
        coerce_number(self.price.as_ref())
    }

    /// Returns the coerced rating (`0.0` when absent or malformed)
    pub fn rating(&self) -> f64 {
        coerce_number(self.rating.as_ref())
    }

    /// Returns the effective listing date.
    ///
    /// Reads `createdAt` when present, otherwise `date`. A null or blank
    /// `createdAt` counts as absent. An unparseable value in the chosen field
    /// yields `None`; there is no fall-through from an invalid `createdAt` to
    /// `date`.
    pub fn listed_at(&self) -> Option<DateTime<Utc>> {
        let raw = self
            .created_at
            .as_ref()
            .filter(|v| match v {
                Value::Null => false,
                Value::String(s) => !s.trim().is_empty(),
                _ => true,
            })
            .or(self.date.as_ref());
        coerce_date(raw)
    }

    /// Returns the identifier as display text
    pub fn id_text(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
