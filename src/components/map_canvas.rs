use std::rc::Rc;
use yew::prelude::*;

use super::zoom_controls::ZoomControls;
use crate::config::MapConfig;
use crate::leaflet::{self, LeafletMap};
use crate::model::LocationId;
use crate::util::{clog, cwarn};
use crate::view::MarkerView;
use crate::viewport::ViewportCommand;

#[derive(Properties, PartialEq, Clone)]
pub struct MapCanvasProps {
    pub config: Rc<MapConfig>,
    pub markers: Rc<Vec<MarkerView>>,
    pub on_marker_click: Callback<LocationId>,
}

/// Hosts the Leaflet map. The engine is mounted once; markers come from the
/// whole catalog and are not affected by the search filter.
#[function_component(MapCanvas)]
pub fn map_canvas(props: &MapCanvasProps) -> Html {
    let engine = use_mut_ref(|| None::<LeafletMap>);

    // Mount effect (engine, tiles, markers)
    {
        let engine = engine.clone();
        let config = props.config.clone();
        let markers = props.markers.clone();
        let on_click = props.on_marker_click.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            match leaflet::mount(&config) {
                Ok(map) => {
                    match leaflet::add_markers(&map, &config, &markers, &on_click) {
                        Ok(l) => {
                            clog(&format!("map mounted with {} markers", l.len()));
                            listeners = l;
                        }
                        Err(err) => cwarn(&format!("marker setup failed: {:?}", err)),
                    }
                    *engine.borrow_mut() = Some(map);
                }
                Err(err) => cwarn(&format!("map engine unavailable: {:?}", err)),
            }
            move || {
                if let Some(map) = engine.borrow_mut().take() {
                    map.remove();
                }
                drop(listeners);
            }
        });
    }

    // Commands issued before the engine mounted are dropped
    let on_command = {
        let engine = engine.clone();
        Callback::from(move |cmd: ViewportCommand| {
            if let Some(map) = &*engine.borrow() {
                cmd.apply(map);
            }
        })
    };

    html! {<div style="position:relative; width:100%; height:100%;">
        <div id={props.config.container_id.clone()} style="width:100%; height:100%;"></div>
        <ZoomControls {on_command} />
    </div>}
}
