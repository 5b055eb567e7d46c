mod components;
mod config;
mod leaflet;
mod model;
mod util;
mod view;
mod viewport;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
