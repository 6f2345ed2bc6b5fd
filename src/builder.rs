// Copyright 2025-present the trailhead authors
// SPDX-License-Identifier: Apache-2.0

//! From content records to search documents.
//!
//! One adapter per source collection, each mapping its concrete shape to
//! [`SearchDocument`]. The mapping is exhaustive: adding a collection
//! means adding an adapter, not teaching a generic walker about another
//! field spelling. Slugged records without a usable slug are skipped -
//! they have no page to link to. Everything here is a pure
//! transformation; building twice from the same content yields the same
//! documents in the same order.

use crate::content::{
    Accommodation, Activity, Attraction, ContentLocation, ContentSet, Description, Dining,
    Editorial, Event, MeetingVenue, Venue,
};
use crate::types::{DocumentType, SearchDocument, SNIPPET_MAX_LEN};

/// Hometown fallback for records that carry no city of their own.
const DEFAULT_CITY: &str = "Auburn";

const ELLIPSIS: &str = "...";

/// Build every search document from the supplied content.
///
/// Collections are walked in a fixed order (activities, accommodations,
/// dining, events, editorials, attractions, venues, meeting venues) so
/// rebuilds are deterministic.
pub fn build_documents(content: &ContentSet) -> Vec<SearchDocument> {
    let mut documents = Vec::with_capacity(content.record_count());

    for activity in &content.activities {
        if let Some(document) = activity_document(activity) {
            documents.push(document);
        }
    }
    for accommodation in &content.accommodations {
        if let Some(document) = accommodation_document(accommodation) {
            documents.push(document);
        }
    }
    for restaurant in &content.dining {
        if let Some(document) = dining_document(restaurant) {
            documents.push(document);
        }
    }
    for event in &content.events {
        if let Some(document) = event_document(event) {
            documents.push(document);
        }
    }
    for editorial in &content.editorials {
        if let Some(document) = editorial_document(editorial) {
            documents.push(document);
        }
    }
    for attraction in &content.attractions {
        documents.push(attraction_document(attraction));
    }
    for venue in &content.venues {
        documents.push(venue_document(venue));
    }
    for venue in &content.meeting_venues {
        documents.push(meeting_venue_document(venue));
    }

    documents
}

fn activity_document(activity: &Activity) -> Option<SearchDocument> {
    let slug = usable_slug(&activity.slug)?;
    let href = match activity.sub_hub.as_deref() {
        Some(hub) => format!("/things-to-do/{}/{}", hub, slug),
        None => format!("/activities/{}", slug),
    };

    Some(SearchDocument {
        id: activity.id.clone(),
        kind: DocumentType::Activity,
        title: activity.title.clone(),
        href,
        text: build_search_text(
            &activity.title,
            activity.excerpt.as_deref(),
            activity.description.as_ref(),
            activity.category.as_deref(),
            activity.location.as_ref(),
        ),
        snippet: clean_snippet(activity.excerpt.as_deref().unwrap_or(&activity.title)),
        tags: activity.category.iter().cloned().collect(),
        location: city_or_default(activity.location.as_ref()),
    })
}

fn accommodation_document(accommodation: &Accommodation) -> Option<SearchDocument> {
    let slug = usable_slug(&accommodation.slug)?;

    Some(SearchDocument {
        id: accommodation.id.clone(),
        kind: DocumentType::Accommodation,
        title: accommodation.title.clone(),
        href: format!("/accommodations/{}", slug),
        text: build_search_text(
            &accommodation.title,
            accommodation.excerpt.as_deref(),
            accommodation.description.as_ref(),
            accommodation.category.as_deref(),
            accommodation.location.as_ref(),
        ),
        snippet: clean_snippet(
            accommodation
                .excerpt
                .as_deref()
                .unwrap_or(&accommodation.title),
        ),
        tags: accommodation.category.iter().cloned().collect(),
        location: city_or_default(accommodation.location.as_ref()),
    })
}

fn dining_document(restaurant: &Dining) -> Option<SearchDocument> {
    let slug = usable_slug(&restaurant.slug)?;
    // Cuisine outranks the broader category in the searchable text; the
    // tags carry both.
    let cuisine_or_category = restaurant
        .cuisine
        .as_deref()
        .or(restaurant.category.as_deref());
    let tags = [&restaurant.cuisine, &restaurant.category]
        .into_iter()
        .filter_map(Clone::clone)
        .collect();

    Some(SearchDocument {
        id: restaurant.id.clone(),
        kind: DocumentType::Dining,
        title: restaurant.title.clone(),
        href: format!("/dining/{}", slug),
        text: build_search_text(
            &restaurant.title,
            restaurant.excerpt.as_deref(),
            restaurant.description.as_ref(),
            cuisine_or_category,
            restaurant.location.as_ref(),
        ),
        snippet: clean_snippet(restaurant.excerpt.as_deref().unwrap_or(&restaurant.title)),
        tags,
        location: city_or_default(restaurant.location.as_ref()),
    })
}

fn event_document(event: &Event) -> Option<SearchDocument> {
    let slug = usable_slug(&event.slug)?;

    Some(SearchDocument {
        id: event.id.clone(),
        kind: DocumentType::Event,
        title: event.title.clone(),
        href: format!("/events/{}", slug),
        text: build_search_text(
            &event.title,
            event.excerpt.as_deref(),
            event.description.as_ref(),
            event.category.as_deref(),
            event.location.as_ref(),
        ),
        snippet: clean_snippet(event.excerpt.as_deref().unwrap_or(&event.title)),
        tags: event.category.iter().cloned().collect(),
        location: city_or_default(event.location.as_ref()),
    })
}

fn editorial_document(editorial: &Editorial) -> Option<SearchDocument> {
    let slug = usable_slug(&editorial.slug)?;

    Some(SearchDocument {
        id: editorial.id.clone(),
        kind: DocumentType::Editorial,
        title: editorial.title.clone(),
        href: format!("/discover/{}", slug),
        text: build_search_text(
            &editorial.title,
            editorial.excerpt.as_deref(),
            editorial.content.as_ref(),
            editorial.category.as_deref(),
            None,
        ),
        snippet: clean_snippet(editorial.excerpt.as_deref().unwrap_or(&editorial.title)),
        tags: editorial.category.iter().cloned().collect(),
        // Stories are not place-bound; they carry no location label.
        location: None,
    })
}

fn attraction_document(attraction: &Attraction) -> SearchDocument {
    let label = attraction.kind.label();
    let mut tags = Vec::with_capacity(attraction.highlights.len() + 1);
    tags.push(label.to_string());
    tags.extend(attraction.highlights.iter().cloned());

    SearchDocument {
        id: attraction.id.clone(),
        kind: DocumentType::Attraction,
        title: attraction.name.clone(),
        href: attraction
            .related_pages
            .first()
            .filter(|page| !page.is_empty())
            .cloned()
            .unwrap_or_else(|| "/things-to-do".to_string()),
        text: build_search_text(
            &attraction.name,
            Some(&attraction.short_description),
            attraction.long_description.as_ref(),
            Some(label),
            None,
        ),
        snippet: clean_snippet(&attraction.short_description),
        tags,
        location: Some(attraction.location_area.label().to_string()),
    }
}

fn venue_document(venue: &Venue) -> SearchDocument {
    let categories = venue.categories.join(" ");
    let location = ContentLocation {
        address: venue.location.address.clone(),
        city: Some(venue.location.city.clone()),
        state: Some(venue.location.state.clone()),
        zip: venue.location.zip.clone(),
    };
    let mut tags = Vec::with_capacity(venue.categories.len() + venue.amenities.len());
    tags.extend(venue.categories.iter().cloned());
    tags.extend(venue.amenities.iter().cloned());

    SearchDocument {
        id: venue.id.clone(),
        kind: DocumentType::Venue,
        title: venue.name.clone(),
        href: "/plan/venues".to_string(),
        text: build_search_text(
            &venue.name,
            Some(&venue.description),
            None,
            Some(&categories),
            Some(&location),
        ),
        snippet: clean_snippet(&venue.description),
        tags,
        location: Some(venue.location.area_label.clone()),
    }
}

fn meeting_venue_document(venue: &MeetingVenue) -> SearchDocument {
    let features = venue.features.join(" ");

    SearchDocument {
        id: format!("meeting-{}", synthesize_slug(&venue.name)),
        kind: DocumentType::Venue,
        title: venue.name.clone(),
        href: "/plan/meetings".to_string(),
        text: build_search_text(&venue.name, Some(&venue.description), None, Some(&features), None),
        snippet: clean_snippet(&venue.description),
        tags: venue.features.clone(),
        location: Some(venue.neighborhood.clone()),
    }
}

/// A record's slug, when it actually points at a page.
fn usable_slug(slug: &Option<String>) -> Option<&str> {
    slug.as_deref().filter(|slug| !slug.is_empty())
}

/// Display location for slugged records: the record's city, falling back
/// to the destination's hometown.
fn city_or_default(location: Option<&ContentLocation>) -> Option<String> {
    let city = location
        .and_then(|location| location.city.as_deref())
        .filter(|city| !city.is_empty())
        .unwrap_or(DEFAULT_CITY);
    Some(city.to_string())
}

/// Id material for sources without ids: the name lowercased, whitespace
/// runs replaced by hyphens.
fn synthesize_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Assemble the lowercase searchable text for one document.
///
/// Parts join in a fixed order: title, excerpt, category/cuisine,
/// location city, location address, flattened description. Empty parts
/// drop out; the result is single-space joined and lowercased. The order
/// weights title and excerpt first in a raw substring sense - ranking
/// only cares which field matched, not where.
pub fn build_search_text(
    title: &str,
    excerpt: Option<&str>,
    description: Option<&Description>,
    category: Option<&str>,
    location: Option<&ContentLocation>,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    push_part(&mut parts, Some(title));
    push_part(&mut parts, excerpt);
    push_part(&mut parts, category);
    if let Some(location) = location {
        push_part(&mut parts, location.city.as_deref());
        push_part(&mut parts, location.address.as_deref());
    }
    if let Some(description) = description {
        let flattened = description.plain_text();
        push_part(&mut parts, Some(&flattened));
    }

    parts.join(" ").to_lowercase()
}

fn push_part(parts: &mut Vec<String>, part: Option<&str>) {
    if let Some(part) = part {
        if !part.is_empty() {
            parts.push(part.to_string());
        }
    }
}

/// Build a display snippet: markup stripped, whitespace collapsed, then
/// truncated on a word boundary to [`SNIPPET_MAX_LEN`] characters,
/// ellipsis included.
pub fn clean_snippet(raw: &str) -> String {
    let stripped = strip_markup(raw);
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_on_word(&cleaned, SNIPPET_MAX_LEN)
}

/// Remove markup from a snippet source. Tag spans (`<...>`) disappear
/// wholesale; stray angle brackets disappear too, so the output never
/// contains `<` or `>`.
fn strip_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if in_tag => {}
            _ => out.push(c),
        }
    }
    out
}

/// Truncate to `max_len` characters on a word boundary, appending an
/// ellipsis when anything was cut. The bound includes the ellipsis.
fn truncate_on_word(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let budget = max_len.saturating_sub(ELLIPSIS.len());
    let head: String = text.chars().take(budget).collect();
    let cut = match head.rfind(' ') {
        Some(pos) if pos > 0 => &head[..pos],
        _ => head.as_str(),
    };
    format!("{}{}", cut, ELLIPSIS)
}
