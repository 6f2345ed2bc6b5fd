//! Shared test fixtures and content constructors.

#![allow(dead_code)]

use std::sync::LazyLock;

use trailhead::content::{
    Accommodation, Activity, Attraction, AttractionKind, ContentLocation, ContentSet, Dining,
    Editorial, Event, LocationArea, MeetingVenue, Venue, VenueLocation,
};
use trailhead::{build_documents, build_index, content, SearchIndex};

/// Index over the bundled sample content, built once per test binary.
static SAMPLE_INDEX: LazyLock<SearchIndex> = LazyLock::new(|| {
    build_index(build_documents(&content::sample())).expect("sample content indexes cleanly")
});

pub fn sample_index() -> &'static SearchIndex {
    &SAMPLE_INDEX
}

pub fn activity(id: &str, title: &str, slug: Option<&str>) -> Activity {
    Activity {
        id: id.to_string(),
        title: title.to_string(),
        slug: slug.map(str::to_string),
        sub_hub: None,
        excerpt: None,
        description: None,
        category: None,
        location: None,
    }
}

pub fn accommodation(id: &str, title: &str, slug: Option<&str>) -> Accommodation {
    Accommodation {
        id: id.to_string(),
        title: title.to_string(),
        slug: slug.map(str::to_string),
        excerpt: None,
        description: None,
        category: None,
        price_range: None,
        rating: None,
        location: None,
    }
}

pub fn dining(id: &str, title: &str, slug: Option<&str>) -> Dining {
    Dining {
        id: id.to_string(),
        title: title.to_string(),
        slug: slug.map(str::to_string),
        excerpt: None,
        description: None,
        category: None,
        cuisine: None,
        price_range: None,
        location: None,
    }
}

pub fn event(id: &str, title: &str, slug: Option<&str>) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        slug: slug.map(str::to_string),
        excerpt: None,
        description: None,
        category: None,
        start_date: None,
        end_date: None,
        location: None,
    }
}

pub fn editorial(id: &str, title: &str, slug: Option<&str>) -> Editorial {
    Editorial {
        id: id.to_string(),
        title: title.to_string(),
        slug: slug.map(str::to_string),
        excerpt: None,
        content: None,
        category: None,
        author: None,
        published_at: None,
    }
}

pub fn attraction(id: &str, name: &str, kind: AttractionKind, area: LocationArea) -> Attraction {
    Attraction {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        short_description: String::new(),
        long_description: None,
        location_area: area,
        related_pages: Vec::new(),
        highlights: Vec::new(),
        duration: None,
        difficulty: None,
    }
}

pub fn venue(id: &str, name: &str) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        location: VenueLocation {
            city: "Auburn".to_string(),
            state: "CA".to_string(),
            zip: None,
            address: None,
            area_label: "Auburn".to_string(),
        },
        categories: Vec::new(),
        amenities: Vec::new(),
        capacity: None,
    }
}

pub fn meeting_venue(name: &str) -> MeetingVenue {
    MeetingVenue {
        name: name.to_string(),
        description: String::new(),
        neighborhood: "Downtown Auburn".to_string(),
        address: None,
        features: Vec::new(),
        capacity: None,
    }
}

pub fn city(name: &str) -> Option<ContentLocation> {
    Some(ContentLocation {
        address: None,
        city: Some(name.to_string()),
        state: None,
        zip: None,
    })
}

/// A small town's worth of content covering every score rung for the
/// query "auburn": one title-prefix dining spot, one title-prefix
/// attraction, one title-substring activity, one text-only match and
/// one miss.
pub fn town_content() -> ContentSet {
    let mut ale_house = dining("d-ale-house", "Auburn Ale House", Some("auburn-ale-house"));
    ale_house.excerpt =
        Some("Craft brewery and pub in the heart of historic Old Town.".to_string());
    ale_house.cuisine = Some("Brewpub".to_string());

    let mut old_town = activity("a-old-town", "Old Town Auburn", Some("old-town-auburn"));
    old_town.excerpt = Some("Gold Rush storefronts, antiques and saloons.".to_string());
    old_town.category = Some("Arts & Culture".to_string());

    let mut hidden_falls = activity(
        "a-hidden-falls",
        "Hidden Falls Regional Park",
        Some("hidden-falls"),
    );
    hidden_falls.excerpt = Some("Waterfall loop trails north of Auburn.".to_string());

    let mut foresthill = attraction(
        "at-foresthill",
        "Foresthill Bridge",
        AttractionKind::Viewpoint,
        LocationArea::Foresthill,
    );
    foresthill.short_description = "The tallest bridge in California.".to_string();

    let mut sra = attraction(
        "at-sra",
        "Auburn State Recreation Area",
        AttractionKind::Park,
        LocationArea::AuburnSra,
    );
    sra.short_description = "Canyon trails along the American River.".to_string();

    ContentSet {
        activities: vec![old_town, hidden_falls],
        dining: vec![ale_house],
        attractions: vec![sra, foresthill],
        ..ContentSet::default()
    }
}
