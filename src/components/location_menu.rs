use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::model::LocationId;
use crate::view::PanelItem;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationMenuProps {
    pub show: bool,
    pub items: Vec<PanelItem>,
    pub on_close: Callback<()>,
    pub on_select: Callback<LocationId>,
}

/// Side panel listing the filtered locations. Closes on the X button, a click
/// on the backdrop, or Escape.
#[function_component]
pub fn LocationMenu(props: &LocationMenuProps) -> Html {
    // Escape listener lives only while the panel is shown
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.show, move |show| {
            let mut listener: Option<Closure<dyn FnMut(KeyboardEvent)>> = None;
            if *show {
                if let Some(win) = web_sys::window() {
                    let cb = on_close.clone();
                    let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            cb.emit(());
                        }
                    });
                    if win
                        .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
                        .is_ok()
                    {
                        listener = Some(handler);
                    }
                }
            }
            move || {
                if let (Some(handler), Some(win)) = (listener, web_sys::window()) {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        handler.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let rows = props.items.iter().map(|item| {
        let onclick = {
            let cb = props.on_select.clone();
            let id = item.id;
            Callback::from(move |_| cb.emit(id))
        };
        html! {
            <div key={item.name.clone()} {onclick} style="display:flex; align-items:flex-start; gap:16px; padding:12px; border-radius:8px; cursor:pointer;">
                <img src={item.image.clone()} alt={item.name.clone()} style="width:80px; height:80px; border-radius:8px; object-fit:cover; flex-shrink:0;" />
                <div>
                    <h3 style="margin:0 0 4px 0; font-weight:600;">{ item.name.clone() }</h3>
                    <p style="margin:0; font-size:14px; color:#4b5563;">{ item.description.clone() }</p>
                </div>
            </div>
        }
    });

    html! {<div style="position:relative; z-index:2000;">
        <div onclick={close_cb.clone()} aria-hidden="true" style="position:fixed; inset:0; background:rgba(0,0,0,0.3);"></div>
        <div role="dialog" style="position:fixed; top:0; bottom:0; left:0; width:100%; max-width:24rem; background:#fff; box-shadow:0 10px 30px rgba(0,0,0,0.3); overflow-y:auto;">
            <div style="padding:16px; display:flex; align-items:center; justify-content:space-between; border-bottom:1px solid #e5e7eb;">
                <h2 style="margin:0; font-size:20px; font-weight:600;">{"Locations"}</h2>
                <button onclick={close_cb} title="Close" style="padding:8px; border:none; background:none; border-radius:999px; cursor:pointer; font-size:18px;">{"\u{2715}"}</button>
            </div>
            <div style="padding:16px; display:flex; flex-direction:column; gap:16px;">
                { if props.items.is_empty() { html!{ <div style="font-size:14px; color:#6b7280;">{"No locations match"}</div> } } else { rows.collect::<Html>() } }
            </div>
        </div>
    </div>}
}
