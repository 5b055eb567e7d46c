//! Compiled-in map settings. Option structs serialize with the map engine's
//! camelCase field names so they can be handed to it as plain JS objects.

use crate::model::LatLng;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconConfig {
    pub icon_url: String,
    pub shadow_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TileLayerConfig {
    #[serde(skip)]
    pub url_template: String,
    pub attribution: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: [f64; 2],
    pub zoom: f64,
    pub zoom_control: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    /// DOM id of the element the engine mounts into.
    pub container_id: String,
    pub center: LatLng,
    pub zoom: f64,
    /// The engine's own zoom buttons; off because `ZoomControls` replaces them.
    pub zoom_control: bool,
    pub tile_layer: TileLayerConfig,
    pub icon: IconConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "location-map".to_string(),
            center: LatLng {
                lat: 40.7128,
                lng: -74.0060,
            },
            zoom: 13.0,
            zoom_control: false,
            tile_layer: TileLayerConfig {
                url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                attribution:
                    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a>"
                        .to_string(),
            },
            icon: IconConfig {
                icon_url: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png".to_string(),
                shadow_url: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png"
                    .to_string(),
                icon_size: [25, 41],
                icon_anchor: [12, 41],
            },
        }
    }
}

impl MapConfig {
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            center: self.center.to_array(),
            zoom: self.zoom,
            zoom_control: self.zoom_control,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_center_on_manhattan_without_engine_zoom_control() {
        let cfg = MapConfig::default();
        assert!(cfg.center.is_valid());
        assert_eq!(cfg.zoom, 13.0);
        let opts = serde_json::to_value(cfg.map_options()).unwrap();
        assert_eq!(
            opts,
            serde_json::json!({ "center": [40.7128, -74.006], "zoom": 13.0, "zoomControl": false })
        );
    }

    #[test]
    fn icon_serializes_with_engine_field_names() {
        let v = serde_json::to_value(&MapConfig::default().icon).unwrap();
        assert_eq!(v["iconSize"], serde_json::json!([25, 41]));
        assert_eq!(v["iconAnchor"], serde_json::json!([12, 41]));
        assert!(v["iconUrl"].as_str().unwrap().ends_with("marker-icon.png"));
        assert!(v["shadowUrl"].as_str().unwrap().ends_with("marker-shadow.png"));
    }

    #[test]
    fn tile_options_carry_only_attribution() {
        let cfg = MapConfig::default();
        let v = serde_json::to_value(&cfg.tile_layer).unwrap();
        assert!(v.get("url_template").is_none());
        assert!(v["attribution"].as_str().unwrap().contains("OpenStreetMap"));
        assert!(cfg.tile_layer.url_template.contains("{z}/{x}/{y}"));
    }
}
