use crate::viewport::ViewportCommand;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub on_command: Callback<ViewportCommand>,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let button = |cmd: ViewportCommand| {
        let cb = props.on_command.clone();
        let onclick = Callback::from(move |_| cb.emit(cmd));
        html! {
            <button {onclick} title={cmd.title()} style="padding:6px 10px; border:none; background:none; border-radius:6px; cursor:pointer;">
                <span style="font-size:20px; font-weight:700;">{ cmd.label() }</span>
            </button>
        }
    };
    html! {<div style="position:absolute; left:16px; bottom:16px; z-index:1000; display:flex; flex-direction:column; gap:8px; background:#fff; border-radius:8px; box-shadow:0 4px 12px rgba(0,0,0,0.15); padding:8px;">
        { button(ViewportCommand::ZoomIn) }
        <div style="height:1px; background:#e5e7eb;"></div>
        { button(ViewportCommand::ZoomOut) }
    </div>}
}
