use super::geo::LatLng;

/// A point of interest shown on the map and in the trending panel
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub name: &'static str,
    pub position: LatLng,
    pub vibe: &'static str,
}

/// A simulated friend location
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub name: &'static str,
    pub position: LatLng,
    pub status: &'static str,
}

pub static VENUES: [Venue; 3] = [
    Venue {
        name: "Fabric London",
        position: LatLng::new(51.5194, -0.1022),
        vibe: "🎵 Electric",
    },
    Venue {
        name: "Jazz Café",
        position: LatLng::new(51.5395, -0.1433),
        vibe: "🎷 Smooth",
    },
    Venue {
        name: "Ministry of Sound",
        position: LatLng::new(51.4978, -0.0991),
        vibe: "🔥 High Energy",
    },
];

pub static FRIENDS: [Friend; 2] = [
    Friend {
        name: "Alex",
        position: LatLng::new(51.515, -0.1),
        status: "At Fabric 🎶",
    },
    Friend {
        name: "Jess",
        position: LatLng::new(51.505, -0.12),
        status: "Exploring Soho 🍸",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Venue,
    Friend,
}

impl MarkerKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MarkerKind::Venue => "map-marker venue-marker",
            MarkerKind::Friend => "map-marker friend-marker",
        }
    }

    pub fn pin_color(&self) -> &'static str {
        match self {
            MarkerKind::Venue => "#2a81cb",
            MarkerKind::Friend => "#cb2b3e",
        }
    }
}

/// Everything the map needs to draw one pin and its popup
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: LatLng,
    pub title: String,
    pub detail: String,
    pub kind: MarkerKind,
}

impl From<&Venue> for MapMarker {
    fn from(venue: &Venue) -> Self {
        Self {
            position: venue.position,
            title: venue.name.to_string(),
            detail: venue.vibe.to_string(),
            kind: MarkerKind::Venue,
        }
    }
}

impl From<&Friend> for MapMarker {
    fn from(friend: &Friend) -> Self {
        Self {
            position: friend.position,
            title: friend.name.to_string(),
            detail: friend.status.to_string(),
            kind: MarkerKind::Friend,
        }
    }
}

/// Venue markers first, then friends, each in declaration order
pub fn markers_for(venues: &[Venue], friends: &[Friend]) -> Vec<MapMarker> {
    venues
        .iter()
        .map(MapMarker::from)
        .chain(friends.iter().map(MapMarker::from))
        .collect()
}
