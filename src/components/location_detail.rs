use crate::view::DetailView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationDetailProps {
    pub detail: Option<DetailView>,
    pub on_close: Callback<()>,
}

/// Fixed overlay for the selected location. Does not move the map viewport.
#[function_component(LocationDetail)]
pub fn location_detail(props: &LocationDetailProps) -> Html {
    let Some(detail) = &props.detail else {
        return html! {};
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; bottom:32px; left:50%; transform:translateX(-50%); z-index:1000; width:100%; max-width:28rem; padding:16px; box-sizing:border-box;">
            <div style="background:#fff; border-radius:8px; box-shadow:0 6px 18px rgba(0,0,0,0.2); overflow:hidden;">
                <img src={detail.image.clone()} alt={detail.name.clone()} style="width:100%; height:12rem; object-fit:cover; display:block;" />
                <div style="padding:16px;">
                    <h3 style="margin:0 0 8px 0; font-size:20px; font-weight:600;">{ detail.name.clone() }</h3>
                    <p style="margin:0; color:#4b5563;">{ detail.description.clone() }</p>
                    <div style="margin-top:16px; display:flex; justify-content:flex-end;">
                        <button onclick={close_cb} style="padding:8px 16px; background:#3b82f6; color:#fff; border:none; border-radius:8px; cursor:pointer;">{"Close"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
