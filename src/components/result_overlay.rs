use crate::game::RoundSummary;
use crate::util::format_timer;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultOverlayProps {
    /// `None` hides the overlay.
    pub summary: Option<RoundSummary>,
    pub play_again: Callback<()>,
    pub dismiss: Callback<()>,
}

#[function_component]
pub fn ResultOverlay(props: &ResultOverlayProps) -> Html {
    let Some(summary) = &props.summary else {
        return html! {};
    };
    let again_btn = {
        let cb = props.play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let close_btn = {
        let cb = props.dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (title, accent) = if summary.won {
        ("Você venceu!", "#2ea043")
    } else {
        ("Tempo esgotado", "#f85149")
    };
    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
            <div role="dialog" aria-modal="true" style={format!("background:rgba(0,0,0,0.85); border:2px solid {}; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;", accent)}>
                <h2 style={format!("margin:0 0 12px 0; color:{};", accent)}>{ title }</h2>
                <p style="margin:4px 0;">{ format!("Itens encontrados: {} de {}", summary.found_count, summary.target_count) }</p>
                <p style="margin:4px 0;">{ format!("Tempo restante: {}", format_timer(summary.remaining_seconds)) }</p>
                { match summary.missing().count() {
                    0 => html! {},
                    missing => html! { <p style="margin:4px 0; opacity:0.8;">{ format!("Faltaram {} itens.", missing) }</p> },
                } }
                <ul style="margin:12px 0 0 0; padding:0; list-style:none; text-align:left; display:flex; flex-direction:column; gap:4px;">
                    { for summary.items.iter().map(|item| {
                        let (mark, color, label) = if item.found {
                            ("✔", "#2ea043", "encontrado")
                        } else {
                            ("✘", "#f85149", "faltou")
                        };
                        html! {
                            <li key={item.product_id.clone()} style={format!("color:{};", color)}>
                                { format!("{} {} ({})", mark, item.name, label) }
                            </li>
                        }
                    }) }
                </ul>
                <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                    <button onclick={again_btn}>{"Jogar novamente"}</button>
                    <button onclick={close_btn}>{"Fechar"}</button>
                </div>
            </div>
        </div>
    }
}
