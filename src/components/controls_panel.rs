use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::game::round::sanitize_duration;
use crate::model::DurationBounds;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub running: bool,
    pub duration: u32,
    pub bounds: DurationBounds,
    pub organized: bool,
    pub on_start: Callback<()>,
    /// Raw text from the duration field; sanitized by the game.
    pub on_duration_change: Callback<String>,
    pub on_toggle_organize: Callback<()>,
    #[prop_or_default]
    pub start_ref: NodeRef,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let organize_cb = {
        let cb = props.on_toggle_organize.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let duration_cb = {
        let cb = props.on_duration_change.clone();
        let bounds = props.bounds;
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let raw = input.value();
                // The `value` prop is unchanged when the clamped number equals the current
                // setting, so the field is rewritten here.
                input.set_value(&settled_value(&raw, &bounds));
                cb.emit(raw);
            }
        })
    };
    let start_label = if props.running { "Rodada em andamento" } else { "Começar" };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; align-items:center; gap:16px; flex-wrap:wrap;">
        <button id="start-button" ref={props.start_ref.clone()} onclick={start_cb} disabled={props.running} style="padding:6px 14px; font-weight:600;">{ start_label }</button>
        <label style="display:flex; align-items:center; gap:6px;">
            <span>{"Tempo (segundos)"}</span>
            <input
                id="time-input"
                type="number"
                min={props.bounds.min.to_string()}
                max={props.bounds.max.to_string()}
                value={props.duration.to_string()}
                onchange={duration_cb}
                style="width:72px;"
            />
        </label>
        <label style="display:flex; align-items:center; gap:6px; cursor:pointer;">
            <input type="checkbox" checked={props.organized} disabled={props.running} onclick={organize_cb} />
            <span>{"Organizar prateleira"}</span>
        </label>
        { if props.running { html!{ <div style="font-size:11px; opacity:0.7;">{"O modo da prateleira muda entre rodadas."}</div> } } else { html!{} } }
    </div>}
}

/// Text the duration field shows once `raw` has been applied.
fn settled_value(raw: &str, bounds: &DurationBounds) -> String {
    sanitize_duration(raw, bounds).to_string()
}
