use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub query: String,
    pub on_query: Callback<String>,
    pub on_open_menu: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_cb = {
        let cb = props.on_open_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let input_cb = {
        let cb = props.on_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    html! {<div style="position:absolute; top:0; left:0; right:0; z-index:1000; background:rgba(255,255,255,0.9); backdrop-filter:blur(4px); box-shadow:0 4px 12px rgba(0,0,0,0.12);">
        <div style="margin:0 auto; padding:12px 16px; display:flex; align-items:center; justify-content:space-between;">
            <button onclick={menu_cb} title="Locations" style="padding:8px; border:none; background:none; border-radius:999px; cursor:pointer; font-size:20px;">{"\u{2630}"}</button>
            <div style="flex:1; max-width:28rem; margin:0 16px;">
                <input
                    type="text"
                    placeholder="Search locations..."
                    value={props.query.clone()}
                    oninput={input_cb}
                    style="width:100%; box-sizing:border-box; padding:8px 16px; border:1px solid #e5e7eb; border-radius:999px; outline:none;"
                />
            </div>
        </div>
    </div>}
}
