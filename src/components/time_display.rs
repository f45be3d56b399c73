use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    /// Already formatted as `MM:SS`.
    pub timer: String,
    pub running: bool,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let color = if props.running { "#f0883e" } else { "#8b949e" };
    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:4px;">
        <div style="font-size:11px; text-transform:uppercase; letter-spacing:1px; opacity:0.7;">{"Tempo"}</div>
        <div id="timer" style={format!("font-size:28px; font-weight:600; font-variant-numeric:tabular-nums; color:{};", color)}>{ props.timer.clone() }</div>
    </div>}
}
