use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    controls_panel::ControlsPanel, result_overlay::ResultOverlay, shelf_grid::ShelfGrid,
    shopping_list::ShoppingList, time_display::TimeDisplay,
};
use crate::game::{GameAction, GameController, Phase, RngState};
use crate::model::{Catalog, DurationBounds, ShelfLayout, TICK_MS, WRONG_PICK_PULSE_MS};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub catalog: Rc<Catalog>,
    #[prop_or_default]
    pub layout: ShelfLayout,
    #[prop_or_default]
    pub bounds: DurationBounds,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let game = {
        let catalog = props.catalog.clone();
        let layout = props.layout;
        let bounds = props.bounds;
        use_reducer(move || {
            let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
            GameController::new(catalog, layout, bounds, RngState::from_seed(seed))
        })
    };
    let start_ref = use_node_ref();

    {
        // Countdown: one interval per tick token, torn down whenever the token changes.
        let dispatcher = game.dispatcher();
        use_effect_with(game.tick_token(), move |token| {
            let mut interval = None;
            if let (Some(token), Some(window)) = (*token, web_sys::window()) {
                let tick = Closure::wrap(Box::new(move || {
                    dispatcher.dispatch(GameAction::Tick { token });
                }) as Box<dyn FnMut()>);
                match window.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    TICK_MS as i32,
                ) {
                    Ok(id) => interval = Some((window, id, tick)),
                    Err(err) => log::error!("could not start countdown: {:?}", err),
                }
            }
            move || {
                if let Some((window, id, tick)) = interval {
                    window.clear_interval_with_handle(id);
                    drop(tick);
                }
            }
        });
    }

    {
        // Wrong-pick highlight reset. Fire and forget: the pulse id keeps a late reset harmless.
        let dispatcher = game.dispatcher();
        use_effect_with(game.latest_miss(), move |miss| {
            if let (Some(pulse_id), Some(window)) = (*miss, web_sys::window()) {
                let reset = Closure::once_into_js(move || {
                    dispatcher.dispatch(GameAction::ClearWrongPick { pulse_id });
                });
                if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    reset.unchecked_ref(),
                    WRONG_PICK_PULSE_MS as i32,
                ) {
                    log::warn!("could not schedule wrong-pick reset: {:?}", err);
                }
            }
            || ()
        });
    }

    {
        let game = game.clone();
        use_effect_with(game.version, move |_| {
            for event in game.last_events() {
                log::debug!("event: {}", event.name());
            }
            || ()
        });
    }

    {
        // Hand focus back to the start button once a round resolves.
        let start_ref = start_ref.clone();
        use_effect_with(game.phase(), move |phase| {
            if matches!(phase, Phase::Resolved { .. }) {
                if let Some(button) = start_ref.cast::<web_sys::HtmlElement>() {
                    let _ = button.focus();
                }
            }
            || ()
        });
    }

    let dispatch = |action: GameAction| {
        let game = game.clone();
        Callback::from(move |_: ()| game.dispatch(action.clone()))
    };
    let on_start = dispatch(GameAction::Start);
    let on_toggle_organize = dispatch(GameAction::ToggleOrganize);
    let on_play_again = dispatch(GameAction::PlayAgain);
    let on_dismiss = dispatch(GameAction::DismissResult);
    let on_duration_change = {
        let game = game.clone();
        Callback::from(move |raw: String| game.dispatch(GameAction::SetDuration { raw }))
    };
    let on_slot_click = {
        let game = game.clone();
        Callback::from(move |index: usize| game.dispatch(GameAction::ClickSlot { index }))
    };

    let running = game.phase() == Phase::Active;
    let config = game.config();

    html! {
        <div id="root" style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:sans-serif; padding:16px; box-sizing:border-box; display:flex; flex-direction:column; gap:12px;">
            <div style="display:flex; align-items:center; justify-content:space-between; gap:16px;">
                <h1 style="margin:0; font-size:22px; color:#58a6ff;">{"Encontre na prateleira"}</h1>
                <TimeDisplay timer={game.timer_text()} running={running} />
            </div>
            <ControlsPanel
                running={running}
                duration={config.duration_seconds}
                bounds={props.bounds}
                organized={config.organize_enabled}
                on_start={on_start}
                on_duration_change={on_duration_change}
                on_toggle_organize={on_toggle_organize}
                start_ref={start_ref.clone()}
            />
            <p id="status-message" aria-live="polite" style="margin:0; min-height:20px;">{ game.status().to_string() }</p>
            <div style="display:flex; gap:16px; align-items:flex-start; flex-wrap:wrap;">
                <ShoppingList entries={game.shopping_list()} />
                <div style="flex:1; min-width:320px;">
                    <ShelfGrid cells={game.grid_cells()} columns={game.layout().columns} on_click={on_slot_click} />
                </div>
            </div>
            <ResultOverlay summary={game.summary().cloned()} play_again={on_play_again} dismiss={on_dismiss} />
        </div>
    }
}
