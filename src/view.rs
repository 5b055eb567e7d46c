//! Pure projection of `MapState` into what the components draw.

use crate::model::{Catalog, LatLng, LocationId, MapState, Selection};

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerView {
    pub id: LocationId,
    pub position: LatLng,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelItem {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    pub markers: Vec<MarkerView>,
    /// Side panel contents; `None` while the menu is closed.
    pub panel: Option<Vec<PanelItem>>,
    pub detail: Option<DetailView>,
}

/// One marker per catalog entry. The search filter never hides markers.
pub fn marker_views(catalog: &Catalog) -> Vec<MarkerView> {
    catalog
        .iter()
        .map(|(id, loc)| MarkerView {
            id,
            position: loc.position,
            title: loc.name.clone(),
        })
        .collect()
}

pub fn compose(state: &MapState) -> MapView {
    let panel = state.menu_open.then(|| {
        state
            .filtered_locations()
            .into_iter()
            .map(|(id, loc)| PanelItem {
                id,
                name: loc.name.clone(),
                description: loc.description.clone(),
                image: loc.image.clone(),
            })
            .collect()
    });
    let detail = match state.selection() {
        Selection::Selected(id) => state.catalog.get(id).map(|loc| DetailView {
            id,
            name: loc.name.clone(),
            description: loc.description.clone(),
            image: loc.image.clone(),
        }),
        Selection::NoSelection => None,
    };
    MapView {
        markers: marker_views(&state.catalog),
        panel,
        detail,
    }
}
