//! Static place directory for the Daejeon Jung-gu tourist district.
//!
//! Compiled in, never mutated at runtime. Also the source of the map
//! view-model handed to the external tile renderer.
use crate::models::place::{Coordinates, Place};
use crate::models::view::MapView;

/// The map always opens centered on 성심당 본점.
pub const MAP_CENTER: Coordinates = Coordinates {
    lat: 36.327692,
    lng: 127.427078,
};

pub const MAP_ZOOM: u8 = 13;

const PLACES: &[(&str, f64, f64)] = &[
    ("성심당 본점", 36.327692, 127.427078),
    ("대전 스카이로드", 36.329269, 127.428858),
    ("으능정이 문화의 거리", 36.329575, 127.427977),
    ("대전아트센터", 36.322589, 127.423216),
    ("대전시청", 36.321655, 127.427138),
    ("대전근현대사전시관", 36.323374, 127.430164),
];

#[derive(Debug, Clone)]
pub struct PlaceDirectory {
    places: Vec<Place>,
}

impl Default for PlaceDirectory {
    fn default() -> Self {
        PlaceDirectory {
            places: PLACES
                .iter()
                .map(|&(name, lat, lng)| Place {
                    name: name.to_string(),
                    lat,
                    lng,
                })
                .collect(),
        }
    }
}

impl PlaceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn names(&self) -> Vec<String> {
        self.places.iter().map(|p| p.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.places.iter().any(|p| p.name == name)
    }

    pub fn coordinates_of(&self, name: &str) -> Option<Coordinates> {
        self.places
            .iter()
            .find(|p| p.name == name)
            .map(Place::coordinates)
    }

    /// Case-insensitive substring search over place names, in directory
    /// order. A query that matches nothing returns the FULL name list so
    /// the selector is never empty; a blank query does the same.
    pub fn search(&self, query: &str) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        let hits: Vec<String> = self
            .places
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .map(|p| p.name.clone())
            .collect();
        if hits.is_empty() {
            self.names()
        } else {
            hits
        }
    }

    pub fn map_view(&self) -> MapView {
        MapView {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            markers: self.places.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_holds_six_places() {
        let dir = PlaceDirectory::new();
        assert_eq!(dir.places().len(), 6);
        assert!(dir.contains("성심당 본점"));
        assert!(!dir.contains("성심당"));
    }

    #[test]
    fn coordinates_lookup() {
        let dir = PlaceDirectory::new();
        let coords = dir.coordinates_of("대전시청").unwrap();
        assert_eq!(coords.lat, 36.321655);
        assert_eq!(coords.lng, 127.427138);
        assert!(dir.coordinates_of("없는 장소").is_none());
    }

    #[test]
    fn search_matches_substring() {
        let dir = PlaceDirectory::new();
        assert_eq!(dir.search("성심당"), vec!["성심당 본점"]);
        assert_eq!(dir.search("대전").len(), 4);
    }

    #[test]
    fn search_falls_back_to_full_list() {
        let dir = PlaceDirectory::new();
        assert_eq!(dir.search("존재하지않음").len(), 6);
        assert_eq!(dir.search("").len(), 6);
    }

    #[test]
    fn search_is_case_insensitive() {
        let dir = PlaceDirectory::new();
        // Latin-case folding; Korean names are unaffected by lowercasing.
        assert_eq!(dir.search("스카이"), vec!["대전 스카이로드"]);
    }

    #[test]
    fn map_view_is_fixed() {
        let view = PlaceDirectory::new().map_view();
        assert_eq!(view.zoom, 13);
        assert_eq!(view.center.lat, 36.327692);
        assert_eq!(view.markers.len(), 6);
    }
}
