// Copyright 2025-present the trailhead authors
// SPDX-License-Identifier: Apache-2.0

//! Typed content collections the document builder consumes.
//!
//! The original site pulled these straight from module-level tables;
//! here every collection travels through [`ContentSet`] so builds are
//! injectable and unit-testable with synthetic fixtures. JSON shapes are
//! camelCase to match the site's export format.
//!
//! Five collections (activities, accommodations, dining, events,
//! editorials) are slug-addressed pages: a record without a slug has no
//! page to link to and gets skipped by the builder. Attractions and
//! venues are registry entries with required ids and fixed link targets;
//! meeting venues have no id at all and get one synthesized.

pub mod rich_text;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

pub use rich_text::{Block, Description, Span};

/// Street/city location attached to slugged records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Room/seat counts venues advertise. Free-text because the source data
/// mixes numbers with ranges like "500+".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theater: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banquet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classroom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reception: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// A thing-to-do listing: hikes, museums, swimming holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    /// URL slug; records without one never reach the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Section hub the page lives under, e.g. "outdoor-adventures".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_hub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ContentLocation>,
}

/// A place to stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    /// Lodging class: "Hotel", "Motel", "Bed & Breakfast".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ContentLocation>,
}

/// A restaurant, winery, or other food-and-drink listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dining {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Takes precedence over `category` in the searchable text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ContentLocation>,
}

/// A dated happening. Dates stay as ISO strings; the search core never
/// interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ContentLocation>,
}

/// A story or guide article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editorial {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Article body; rich blocks in the export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Description>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// What kind of attraction a registry entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttractionKind {
    Trail,
    Park,
    Museum,
    HistoricSite,
    Winery,
    Restaurant,
    Brewery,
    Market,
    Viewpoint,
    WaterActivity,
    Cultural,
    Shopping,
    Family,
}

impl AttractionKind {
    /// Display label, used both on attraction pages and as a search tag.
    pub fn label(self) -> &'static str {
        match self {
            AttractionKind::Trail => "Trail",
            AttractionKind::Park => "Park",
            AttractionKind::Museum => "Museum",
            AttractionKind::HistoricSite => "Historic Site",
            AttractionKind::Winery => "Winery",
            AttractionKind::Restaurant => "Restaurant",
            AttractionKind::Brewery => "Brewery",
            AttractionKind::Market => "Market",
            AttractionKind::Viewpoint => "Viewpoint",
            AttractionKind::WaterActivity => "Water Activity",
            AttractionKind::Cultural => "Arts & Culture",
            AttractionKind::Shopping => "Shopping",
            AttractionKind::Family => "Family Fun",
        }
    }
}

/// Which part of the destination an attraction sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationArea {
    OldTown,
    Downtown,
    AuburnSra,
    Foresthill,
    NorthAuburn,
    PlacerCounty,
    Foothills,
}

impl LocationArea {
    /// Display label, used as the document's location field.
    pub fn label(self) -> &'static str {
        match self {
            LocationArea::OldTown => "Old Town Auburn",
            LocationArea::Downtown => "Downtown",
            LocationArea::AuburnSra => "Auburn State Recreation Area",
            LocationArea::Foresthill => "Foresthill",
            LocationArea::NorthAuburn => "North Auburn",
            LocationArea::PlacerCounty => "Placer County",
            LocationArea::Foothills => "Sierra Foothills",
        }
    }
}

/// A curated registry entry: trails, museums, viewpoints. Always has an
/// id and links into an existing page rather than owning one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttractionKind,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<Description>,
    pub location_area: LocationArea,
    /// Internal pages the attraction appears on; the first one becomes
    /// the search result's link target.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_pages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// Where a venue sits, with the display label shown in results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueLocation {
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// e.g. "Auburn 95603" or "Near Auburn / Placer County".
    pub area_label: String,
}

/// An event space from the venues registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: VenueLocation,
    /// indoor, outdoor, historic, conference, theater...
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// parking, wifi, av-equipment, catering...
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Capacity>,
}

/// A meeting space from the meetings page. Carries no id; the builder
/// synthesizes one from the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingVenue {
    pub name: String,
    pub description: String,
    pub neighborhood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Capacity>,
}

/// Every content collection a build draws from.
///
/// All collections default to empty, so a JSON payload may supply any
/// subset and an empty set is a valid (if useless) input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSet {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<Activity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accommodations: Vec<Accommodation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dining: Vec<Dining>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub editorials: Vec<Editorial>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attractions: Vec<Attraction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub venues: Vec<Venue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meeting_venues: Vec<MeetingVenue>,
}

/// Bundled Auburn dataset, parsed once on first use.
static SAMPLE: LazyLock<ContentSet> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../content/sample.json"))
        .expect("bundled sample content is valid JSON")
});

/// The bundled Auburn, CA dataset. Default content for the CLI and the
/// corpus the benches run against.
pub fn sample() -> ContentSet {
    SAMPLE.clone()
}

/// Load a content directory: one JSON file per collection, any subset.
/// Missing files mean empty collections; unreadable or malformed files
/// are errors naming the offending file.
pub fn load_dir(dir: &Path) -> Result<ContentSet, String> {
    Ok(ContentSet {
        activities: load_collection(dir, "activities.json")?,
        accommodations: load_collection(dir, "accommodations.json")?,
        dining: load_collection(dir, "dining.json")?,
        events: load_collection(dir, "events.json")?,
        editorials: load_collection(dir, "editorials.json")?,
        attractions: load_collection(dir, "attractions.json")?,
        venues: load_collection(dir, "venues.json")?,
        meeting_venues: load_collection(dir, "meeting-venues.json")?,
    })
}

impl ContentSet {
    /// Total records across all collections.
    pub fn record_count(&self) -> usize {
        self.activities.len()
            + self.accommodations.len()
            + self.dining.len()
            + self.events.len()
            + self.editorials.len()
            + self.attractions.len()
            + self.venues.len()
            + self.meeting_venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

fn load_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, String> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&raw).map_err(|e| format!("failed to parse {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_content_parses_and_is_populated() {
        let content = sample();
        assert!(!content.is_empty());
        assert!(!content.activities.is_empty());
        assert!(!content.attractions.is_empty());
        assert!(!content.meeting_venues.is_empty());
        assert_eq!(content.record_count(), sample().record_count());
    }

    #[test]
    fn test_partial_payload_defaults_missing_collections() {
        let content: ContentSet = serde_json::from_str(
            r#"{
                "dining": [{
                    "id": "d1",
                    "title": "Mt Vernon Winery",
                    "slug": "mt-vernon-winery",
                    "cuisine": "Wine Tasting"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(content.dining.len(), 1);
        assert!(content.activities.is_empty());
        assert!(content.venues.is_empty());
        assert_eq!(content.dining[0].cuisine.as_deref(), Some("Wine Tasting"));
    }

    #[test]
    fn test_attraction_enums_use_kebab_case_tags() {
        let attraction: Attraction = serde_json::from_str(
            r#"{
                "id": "lake-clementine-trail",
                "name": "Lake Clementine Trail",
                "type": "trail",
                "shortDescription": "Canyon hike with river views.",
                "locationArea": "auburn-sra",
                "relatedPages": ["/things-to-do/outdoor-adventures"]
            }"#,
        )
        .unwrap();

        assert_eq!(attraction.kind, AttractionKind::Trail);
        assert_eq!(attraction.location_area, LocationArea::AuburnSra);
        assert_eq!(attraction.location_area.label(), "Auburn State Recreation Area");
    }

    #[test]
    fn test_load_dir_with_missing_files_yields_empty_collections() {
        let dir = tempfile::tempdir().unwrap();
        let content = load_dir(dir.path()).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_load_dir_reads_collections_and_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("events.json"),
            r#"[{"id": "e1", "title": "Gold Rush Days", "slug": "gold-rush-days"}]"#,
        )
        .unwrap();

        let content = load_dir(dir.path()).unwrap();
        assert_eq!(content.events.len(), 1);
        assert_eq!(content.record_count(), 1);

        fs::write(dir.path().join("venues.json"), "not json").unwrap();
        let err = load_dir(dir.path()).unwrap_err();
        assert!(err.contains("venues.json"));
    }
}
