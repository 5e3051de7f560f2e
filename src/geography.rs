//! Serde model for the world-atlas topology feed.
//!
//! Only the identity-bearing parts are modeled: record ids and name
//! properties. Geometry arcs and coordinates are irrelevant here and
//! are skipped during deserialization.

use serde::{Deserialize, Deserializer};

use crate::region::{self, Region};
use crate::registry;
use crate::resolver;

/// Top-level topology document.
#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    pub objects: Objects,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Objects {
    pub countries: CountryCollection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryCollection {
    #[serde(default)]
    pub geometries: Vec<GeographyRecord>,
}

/// One country shape's identity data.
///
/// The feed is inconsistent about ids: most shapes carry a numeric
/// string, some a bare number, and Kosovo none at all. All three forms
/// normalize to `Option<String>`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeographyRecord {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: Properties,
}

/// Name properties under the keys different feed revisions have used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(rename = "NAME")]
    pub name_upper: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "NAME_EN")]
    pub name_en: Option<String>,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        // Re-pad to the three-digit ISO form ("10" -> "010").
        RawId::Number(number) => format!("{number:03}"),
    }))
}

impl GeographyRecord {
    /// First name property present, in feed preference order.
    pub fn raw_name(&self) -> Option<&str> {
        self.properties
            .name_upper
            .as_deref()
            .or(self.properties.name.as_deref())
            .or(self.properties.name_en.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Canonical alpha-2 code, if the record resolves at all.
    pub fn alpha2(&self) -> Option<&'static str> {
        resolver::resolve_with_name(self.id.as_deref(), self.raw_name().unwrap_or(""))
    }

    /// Name to show: the feed's own name, else the registry name for
    /// the resolved code, else a label built from the raw id.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.raw_name() {
            return name.to_string();
        }
        if let Some(name) = self.alpha2().and_then(registry::canonical_name) {
            return name.to_string();
        }
        match self.id.as_deref() {
            Some(id) => format!("Country {id}"),
            None => "Unknown".to_string(),
        }
    }

    /// Esports region of the resolved country.
    pub fn region(&self) -> Option<Region> {
        self.alpha2().and_then(region::region_of)
    }
}
