use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::utils::error::Result;

/// A portfolio document is deliberately schemaless. Neither the provider nor
/// the loader validates its fields; both pass it through as an opaque JSON
/// value so that whatever lives in the document file is served verbatim.
///
/// The expected top-level shape is `personal` (name/title/email) plus the
/// `social`, `experience`, `projects`, `skills` and `testimonials` lists, but
/// unknown shapes round-trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioDocument(pub Value);

impl PortfolioDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value = serde_json::from_slice(bytes)?;
        Ok(Self(value))
    }

    /// Degraded stub substituted when the document file is missing or
    /// unparsable: real contact fields, empty collections. The asymmetry
    /// against a full document is what tells an operator reading logs that
    /// the file never loaded.
    pub fn fallback() -> Self {
        Self(json!({
            "personal": {
                "name": "Jordan Hale",
                "title": "Senior Product Manager & Technical Leader",
                "email": "jordan@example.com",
            },
            "social": [],
            "experience": [],
            "projects": [],
            "skills": [],
            "testimonials": [],
        }))
    }

    /// Sample document compiled into the library. A consuming view renders
    /// this before the fetch settles and keeps it whenever the fetch fails.
    pub fn bundled_default() -> Self {
        Self(json!({
            "personal": {
                "name": "Jordan Hale",
                "title": "Senior Product Manager & Technical Leader",
                "email": "jordan@example.com",
            },
            "social": [
                { "label": "GitHub", "url": "https://github.com/jordanhale" },
                { "label": "LinkedIn", "url": "https://linkedin.com/in/jordanhale" },
            ],
            "experience": [
                {
                    "company": "Northwind Labs",
                    "role": "Senior Product Manager",
                    "period": "2021 - present",
                    "summary": "Leads the developer-platform product line.",
                },
                {
                    "company": "Contoso",
                    "role": "Technical Program Manager",
                    "period": "2017 - 2021",
                    "summary": "Shipped the partner integration platform.",
                },
            ],
            "projects": [
                {
                    "name": "Telemetry Atlas",
                    "description": "Self-serve analytics for product teams.",
                    "url": "https://github.com/jordanhale/telemetry-atlas",
                },
            ],
            "skills": [
                { "category": "Product", "items": ["Roadmapping", "Discovery", "Analytics"] },
                { "category": "Engineering", "items": ["Rust", "TypeScript", "SQL"] },
            ],
            "testimonials": [
                {
                    "author": "Priya N.",
                    "quote": "Turns ambiguous problems into shippable plans.",
                },
            ],
        }))
    }

    /// `null` or `{}`. A vacuous fetch result must never wipe the bundled
    /// default on the loader side.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    pub fn personal_field(&self, field: &str) -> Option<&str> {
        self.0.get("personal")?.get(field)?.as_str()
    }

    pub fn section_len(&self, section: &str) -> usize {
        self.0
            .get(section)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}
