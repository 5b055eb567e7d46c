use std::rc::Rc;
use yew::prelude::*;

use super::{
    header::Header, location_detail::LocationDetail, location_menu::LocationMenu,
    map_canvas::MapCanvas,
};
use crate::config::MapConfig;
use crate::model::{Catalog, LocationId, MapAction, MapState};
use crate::util::{clog, cwarn};
use crate::view::{MapView, compose};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| MapConfig::default());
    let state = use_reducer(|| {
        let catalog = Catalog::builtin().unwrap_or_else(|err| {
            cwarn(&format!("catalog rejected: {err}"));
            Catalog::default()
        });
        if catalog.is_empty() {
            cwarn("no locations to show");
        } else {
            clog(&format!("catalog loaded: {} locations", catalog.len()));
        }
        MapState::new(Rc::new(catalog))
    });

    // Log selection / menu transitions
    {
        let name = state
            .selected_location()
            .map(|l| l.name.clone())
            .unwrap_or_else(|| "none".to_string());
        use_effect_with((state.selected, state.menu_open), move |deps| {
            clog(&format!("selected: {}, menu open: {}", name, deps.1));
            || ()
        });
    }

    let on_query = {
        let state = state.clone();
        Callback::from(move |q: String| state.dispatch(MapAction::SetQuery(q)))
    };
    let open_menu = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(MapAction::OpenMenu))
    };
    let close_menu = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(MapAction::CloseMenu))
    };
    let select_marker = {
        let state = state.clone();
        Callback::from(move |id: LocationId| state.dispatch(MapAction::SelectMarker(id)))
    };
    let select_from_menu = {
        let state = state.clone();
        Callback::from(move |id: LocationId| state.dispatch(MapAction::SelectFromMenu(id)))
    };
    let close_detail = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(MapAction::CloseDetail))
    };

    let MapView {
        markers,
        panel,
        detail,
    } = compose(&state);
    let menu_open = panel.is_some();

    html! {
        <div style="position:relative; width:100%; height:100vh; overflow:hidden;">
            <Header query={state.search_query.clone()} {on_query} on_open_menu={open_menu} />
            <MapCanvas config={config.clone()} markers={Rc::new(markers)} on_marker_click={select_marker} />
            <LocationMenu show={menu_open} items={panel.unwrap_or_default()} on_close={close_menu} on_select={select_from_menu} />
            <LocationDetail {detail} on_close={close_detail} />
        </div>
    }
}
