//! Core data models for the location map.
//! The catalog is fixed once the app mounts; `MapState` is the only mutable
//! state and it changes exclusively through `MapAction` reductions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;
use yew::Reducible;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("location #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("coordinate ({lat}, {lng}) is outside the valid range")]
    InvalidCoordinate { lat: f64, lng: f64 },
    #[error("duplicate location name: {0}")]
    DuplicateName(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Result<Self, CatalogError> {
        let pos = Self { lat, lng };
        if pos.is_valid() {
            Ok(pos)
        } else {
            Err(CatalogError::InvalidCoordinate { lat, lng })
        }
    }

    /// Latitude in [-90, 90], longitude in [-180, 180], both finite.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub position: LatLng,
    /// Display title and search key. Unique within a catalog.
    pub name: String,
    pub description: String,
    /// Image URL shown in the list thumbnail and the detail overlay.
    pub image: String,
}

/// Index of a location in catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub usize);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    pub fn new(locations: Vec<Location>) -> Result<Self, CatalogError> {
        Self::validate(&locations)?;
        Ok(Self { locations })
    }

    fn validate(locations: &[Location]) -> Result<(), CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(locations.len());
        for (index, loc) in locations.iter().enumerate() {
            if loc.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !loc.position.is_valid() {
                return Err(CatalogError::InvalidCoordinate {
                    lat: loc.position.lat,
                    lng: loc.position.lng,
                });
            }
            if !seen.insert(loc.name.as_str()) {
                return Err(CatalogError::DuplicateName(loc.name.clone()));
            }
        }
        Ok(())
    }

    /// The points of interest shipped with the site.
    pub fn builtin() -> Result<Self, CatalogError> {
        let entry = |lat: f64, lng: f64, name: &str, description: &str, image: &str| {
            LatLng::new(lat, lng).map(|position| Location {
                position,
                name: name.to_string(),
                description: description.to_string(),
                image: image.to_string(),
            })
        };
        Self::new(vec![
            entry(
                40.7128,
                -74.0060,
                "Central Park",
                "Urban oasis in the heart of Manhattan",
                "https://images.unsplash.com/photo-1534270804882-6b5048b1c1fc?auto=format&fit=crop&w=300&h=200",
            )?,
            entry(
                40.7527,
                -73.9772,
                "Empire State Building",
                "Iconic Art Deco skyscraper",
                "https://images.unsplash.com/photo-1555109307-f7d9da25c244?auto=format&fit=crop&w=300&h=200",
            )?,
            entry(
                40.7484,
                -73.9857,
                "Times Square",
                "The Crossroads of the World",
                "https://images.unsplash.com/photo-1531778272849-d1dd22444c06?auto=format&fit=crop&w=300&h=200",
            )?,
        ])
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (LocationId(i), loc))
    }
}

/// Catalog entries whose name contains `query`, ignoring case, in catalog order.
/// An empty query matches everything.
pub fn filter_locations<'a>(catalog: &'a Catalog, query: &str) -> Vec<(LocationId, &'a Location)> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|(_, loc)| loc.name.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    NoSelection,
    Selected(LocationId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapState {
    pub catalog: Rc<Catalog>,
    /// Stored verbatim; no trimming.
    pub search_query: String,
    pub selected: Option<LocationId>,
    pub menu_open: bool,
}

impl MapState {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            search_query: String::new(),
            selected: None,
            menu_open: false,
        }
    }

    pub fn selection(&self) -> Selection {
        match self.selected {
            Some(id) => Selection::Selected(id),
            None => Selection::NoSelection,
        }
    }

    pub fn selected_location(&self) -> Option<&Location> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    pub fn filtered_locations(&self) -> Vec<(LocationId, &Location)> {
        filter_locations(&self.catalog, &self.search_query)
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug, PartialEq)]
pub enum MapAction {
    SetQuery(String),
    OpenMenu,
    CloseMenu,
    /// Marker clicked on the map surface.
    SelectMarker(LocationId),
    /// List item clicked in the side panel; also closes the panel.
    SelectFromMenu(LocationId),
    CloseDetail,
}

impl Reducible for MapState {
    type Action = MapAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use MapAction::*;
        let mut new = (*self).clone();
        match action {
            SetQuery(query) => {
                if query == self.search_query {
                    return self;
                }
                new.search_query = query;
            }
            OpenMenu => {
                if self.menu_open {
                    return self;
                }
                new.menu_open = true;
            }
            CloseMenu => {
                if !self.menu_open {
                    return self;
                }
                new.menu_open = false;
            }
            SelectMarker(id) => {
                if self.catalog.get(id).is_none() || self.selected == Some(id) {
                    return self;
                }
                new.selected = Some(id);
            }
            SelectFromMenu(id) => {
                if self.catalog.get(id).is_none() {
                    return self;
                }
                if self.selected == Some(id) && !self.menu_open {
                    return self;
                }
                new.selected = Some(id);
                new.menu_open = false;
            }
            CloseDetail => {
                if self.selected.is_none() {
                    return self;
                }
                new.selected = None;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> Rc<MapState> {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        Rc::new(MapState::new(Rc::new(catalog)))
    }

    fn names(list: &[(LocationId, &Location)]) -> Vec<String> {
        list.iter().map(|(_, l)| l.name.clone()).collect()
    }

    fn id_of(state: &MapState, name: &str) -> LocationId {
        state
            .catalog
            .iter()
            .find(|(_, l)| l.name == name)
            .map(|(id, _)| id)
            .expect("name in catalog")
    }

    fn loc(name: &str, lat: f64, lng: f64) -> Location {
        Location {
            position: LatLng { lat, lng },
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn builtin_catalog_order_and_defaults() {
        let s = initial();
        assert_eq!(s.catalog.len(), 3);
        assert_eq!(
            names(&s.filtered_locations()),
            vec!["Central Park", "Empire State Building", "Times Square"]
        );
        assert_eq!(s.search_query, "");
        assert_eq!(s.selection(), Selection::NoSelection);
        assert!(!s.menu_open);
    }

    #[test]
    fn catalog_rejects_duplicate_names() {
        let err = Catalog::new(vec![loc("Pier", 1.0, 1.0), loc("Pier", 2.0, 2.0)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("Pier".into()));
    }

    #[test]
    fn catalog_rejects_empty_name_and_bad_coordinates() {
        assert_eq!(
            Catalog::new(vec![loc("A", 0.0, 0.0), loc("  ", 0.0, 0.0)]).unwrap_err(),
            CatalogError::EmptyName { index: 1 }
        );
        assert!(matches!(
            Catalog::new(vec![loc("A", 91.0, 0.0)]),
            Err(CatalogError::InvalidCoordinate { .. })
        ));
        assert!(LatLng::new(0.0, -180.0).is_ok());
        assert!(LatLng::new(f64::NAN, 0.0).is_err());
        assert!(LatLng::new(0.0, 180.5).is_err());
    }

    #[test]
    fn filter_matches_case_insensitive_substring() {
        let s = initial();
        let square = filter_locations(&s.catalog, "square");
        assert_eq!(names(&square), vec!["Times Square"]);

        // "Central" also contains an e.
        let e = filter_locations(&s.catalog, "E");
        assert_eq!(
            names(&e),
            vec!["Central Park", "Empire State Building", "Times Square"]
        );
        let em = filter_locations(&s.catalog, "EM");
        assert_eq!(names(&em), vec!["Empire State Building"]);

        assert!(filter_locations(&s.catalog, "brooklyn").is_empty());
    }

    #[test]
    fn empty_query_is_full_catalog_and_query_is_not_trimmed() {
        let s = initial();
        assert_eq!(filter_locations(&s.catalog, "").len(), 3);
        let s = s.reduce(MapAction::SetQuery(" park".into()));
        assert_eq!(s.search_query, " park");
        assert_eq!(names(&s.filtered_locations()), vec!["Central Park"]);
        let s = s.reduce(MapAction::SetQuery("park ".into()));
        assert!(s.filtered_locations().is_empty());
    }

    #[test]
    fn marker_click_then_close() {
        let s = initial();
        let park = id_of(&s, "Central Park");
        let s = s.reduce(MapAction::SelectMarker(park));
        assert_eq!(s.selection(), Selection::Selected(park));
        assert_eq!(s.selected_location().map(|l| l.name.as_str()), Some("Central Park"));
        let s = s.reduce(MapAction::CloseDetail);
        assert_eq!(s.selection(), Selection::NoSelection);
    }

    #[test]
    fn close_detail_without_selection_is_noop() {
        let s = initial();
        let after = s.clone().reduce(MapAction::CloseDetail);
        assert!(Rc::ptr_eq(&s, &after));
        assert_eq!(after.selection(), Selection::NoSelection);
    }

    #[test]
    fn reselect_goes_directly_to_new_location() {
        let s = initial();
        let a = id_of(&s, "Central Park");
        let b = id_of(&s, "Times Square");
        let s = s.reduce(MapAction::SelectMarker(a));
        let s = s.reduce(MapAction::SelectMarker(b));
        assert_eq!(s.selection(), Selection::Selected(b));
    }

    #[test]
    fn select_from_menu_closes_menu_in_same_state() {
        let s = initial().reduce(MapAction::OpenMenu);
        assert!(s.menu_open);
        let s = s.reduce(MapAction::SetQuery("empire".into()));
        let hits = s.filtered_locations();
        assert_eq!(hits.len(), 1);
        let (id, _) = hits[0];
        let s = s.reduce(MapAction::SelectFromMenu(id));
        assert!(!s.menu_open);
        assert_eq!(
            s.selected_location().map(|l| l.name.as_str()),
            Some("Empire State Building")
        );
    }

    #[test]
    fn menu_open_close_and_repeat_is_noop() {
        let s = initial();
        let open = s.reduce(MapAction::OpenMenu);
        let again = open.clone().reduce(MapAction::OpenMenu);
        assert!(Rc::ptr_eq(&open, &again));
        let closed = again.reduce(MapAction::CloseMenu);
        assert!(!closed.menu_open);
        let closed_again = closed.clone().reduce(MapAction::CloseMenu);
        assert!(Rc::ptr_eq(&closed, &closed_again));
    }

    #[test]
    fn unknown_location_is_ignored() {
        let s = initial().reduce(MapAction::OpenMenu);
        let after = s.clone().reduce(MapAction::SelectFromMenu(LocationId(42)));
        assert!(Rc::ptr_eq(&s, &after));
        let after = after.reduce(MapAction::SelectMarker(LocationId(3)));
        assert!(after.menu_open);
        assert_eq!(after.selection(), Selection::NoSelection);
    }

    #[test]
    fn menu_filter_is_live_while_open() {
        let s = initial().reduce(MapAction::OpenMenu);
        let s = s.reduce(MapAction::SetQuery("t".into()));
        assert!(s.menu_open);
        assert_eq!(
            names(&s.filtered_locations()),
            vec!["Central Park", "Empire State Building", "Times Square"]
        );
        let s = s.reduce(MapAction::SetQuery("ti".into()));
        assert_eq!(names(&s.filtered_locations()), vec!["Times Square"]);
    }
}
