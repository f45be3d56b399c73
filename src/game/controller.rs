//! Round state machine.
//!
//! `Idle` (fresh shelf, no countdown) → `Active` (countdown running, clicks accepted) →
//! `Resolved { won }` (result overlay open) → `Idle` again on dismiss, or straight back to
//! `Active` on "play again". Calls made in the wrong phase are silently ignored and report
//! no events.

use std::rc::Rc;

use yew::Reducible;

use super::clock::{Countdown, TickToken};
use super::events::{
    EventBus, GameEvent, GridCell, MissPulse, RoundSummary, ShoppingEntry, SummaryItem,
};
use super::round::{Configuration, RoundState, clamp_duration, sanitize_duration};
use super::shuffle::{RngState, shuffle};
use super::slots;
use crate::model::{Catalog, DurationBounds, Product, ShelfLayout, ShelfMode};
use crate::util::{format_timer, seconds_label};

const STATUS_IDLE: &str =
    "Assim que o tempo começar a contar, encontre os itens destacados na lista.";
const STATUS_WRONG: &str = "Esse item não está na lista. Continue procurando!";
const STATUS_WON: &str = "Parabéns! Você encontrou todos os itens a tempo.";
const STATUS_LOST: &str = "O tempo acabou! Tente novamente.";
const STATUS_ORGANIZED: &str = "Prateleira organizada: produtos iguais ficam lado a lado.";
const STATUS_RANDOM: &str = "Prateleira embaralhada: os produtos estão espalhados.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    Resolved { won: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    Start,
    PlayAgain,
    /// Fired once per second by the page's interval.
    Tick { token: TickToken },
    ClickSlot { index: usize },
    ClickProduct { product_id: String },
    SetDuration { raw: String },
    ToggleOrganize,
    DismissResult,
    /// Fired by the wrong-pick reset timeout.
    ClearWrongPick { pulse_id: u64 },
}

#[derive(Clone, Debug)]
pub struct GameController {
    catalog: Rc<Catalog>,
    layout: ShelfLayout,
    bounds: DurationBounds,
    config: Configuration,
    round: RoundState,
    /// Row-major shelf contents.
    shelf: Vec<Product>,
    countdown: Countdown,
    rng: RngState,
    status: String,
    /// Present while the result overlay is open.
    summary: Option<RoundSummary>,
    grid_locked: bool,
    misses: Vec<MissPulse>,
    next_pulse_id: u64,
    bus: EventBus,
    last_events: Vec<GameEvent>,
    /// Bumped on every reduce that changed something.
    pub version: u64,
}

impl GameController {
    /// Builds the controller and prepares the first round with the default duration.
    pub fn new(
        catalog: Rc<Catalog>,
        layout: ShelfLayout,
        bounds: DurationBounds,
        rng: RngState,
    ) -> Self {
        let mut controller = Self {
            catalog,
            layout,
            bounds,
            config: Configuration::new(&bounds),
            round: RoundState::new(Vec::new(), bounds.default),
            shelf: Vec::new(),
            countdown: Countdown::default(),
            rng,
            status: String::new(),
            summary: None,
            grid_locked: false,
            misses: Vec::new(),
            next_pulse_id: 0,
            bus: EventBus::default(),
            last_events: Vec::new(),
            version: 0,
        };
        log::debug!("game seeded with {}", controller.rng.seed());
        controller.last_events = controller.prepare_round(bounds.default);
        controller
    }

    // ---------------- Inputs -----------------

    pub fn prepare_round(&mut self, duration: u32) -> Vec<GameEvent> {
        self.prepare(duration);
        self.bus.drain()
    }

    pub fn start_round(&mut self) -> Vec<GameEvent> {
        self.start();
        self.bus.drain()
    }

    /// Same as [`Self::start_round`]; offered from the result overlay.
    pub fn play_again(&mut self) -> Vec<GameEvent> {
        self.start_round()
    }

    pub fn tick(&mut self, token: TickToken) -> Vec<GameEvent> {
        if !self.round.active || !self.countdown.accepts(token) {
            return Vec::new();
        }
        let expired = self.round.tick();
        self.bus.push(GameEvent::TimerUpdated {
            remaining_seconds: self.round.remaining_seconds,
            timer: self.timer_text(),
        });
        if expired {
            self.finish(false);
        }
        self.bus.drain()
    }

    pub fn on_product_click(&mut self, product_id: &str) -> Vec<GameEvent> {
        if self.catalog.get(product_id).is_none() {
            log::warn!("click on unknown product {:?}", product_id);
            return Vec::new();
        }
        let slots = self.slots_holding(product_id);
        self.pick(product_id, slots);
        self.bus.drain()
    }

    pub fn on_slot_click(&mut self, index: usize) -> Vec<GameEvent> {
        let Some(product) = self.shelf.get(index) else {
            return Vec::new();
        };
        let product_id = product.id.clone();
        self.pick(&product_id, vec![index]);
        self.bus.drain()
    }

    pub fn finish_round(&mut self, won: bool) -> Vec<GameEvent> {
        self.finish(won);
        self.bus.drain()
    }

    pub fn set_duration(&mut self, raw: &str) -> Vec<GameEvent> {
        let duration = sanitize_duration(raw, &self.bounds);
        self.config.duration_seconds = duration;
        // A running round keeps its own clock; the new value applies from the next round.
        if !self.round.active {
            self.round.set_duration(duration);
        }
        log::debug!("duration set to {}s (raw {:?})", duration, raw);
        self.bus.push(GameEvent::DurationChanged {
            duration_seconds: duration,
            timer: self.timer_text(),
        });
        self.bus.drain()
    }

    pub fn toggle_organize_mode(&mut self) -> Vec<GameEvent> {
        if self.round.active {
            log::debug!("organize toggle ignored during an active round");
            return Vec::new();
        }
        self.config.organize_enabled = !self.config.organize_enabled;
        self.shelf = self.build_shelf();
        self.misses.clear();
        let status = if self.config.organize_enabled {
            STATUS_ORGANIZED
        } else {
            STATUS_RANDOM
        };
        self.status = status.to_string();
        self.bus.push(GameEvent::GridRegenerated {
            grid: self.grid_cells(),
            organized: self.config.organize_enabled,
            status: self.status.clone(),
        });
        self.bus.drain()
    }

    pub fn dismiss_result(&mut self) -> Vec<GameEvent> {
        if self.round.active || self.summary.take().is_none() {
            return Vec::new();
        }
        self.bus.push(GameEvent::ResultDismissed);
        self.bus.drain()
    }

    /// Clears one wrong-pick highlight. Unknown ids (e.g. from a previous round) are ignored.
    pub fn clear_wrong_pick(&mut self, pulse_id: u64) -> Vec<GameEvent> {
        let before = self.misses.len();
        self.misses.retain(|m| m.id != pulse_id);
        if self.misses.len() == before {
            return Vec::new();
        }
        self.bus.push(GameEvent::WrongPickCleared { pulse_id });
        self.bus.drain()
    }

    pub fn apply(&mut self, action: GameAction) -> Vec<GameEvent> {
        use GameAction::*;
        match action {
            Start => self.start_round(),
            PlayAgain => self.play_again(),
            Tick { token } => self.tick(token),
            ClickSlot { index } => self.on_slot_click(index),
            ClickProduct { product_id } => self.on_product_click(&product_id),
            SetDuration { raw } => self.set_duration(&raw),
            ToggleOrganize => self.toggle_organize_mode(),
            DismissResult => self.dismiss_result(),
            ClearWrongPick { pulse_id } => self.clear_wrong_pick(pulse_id),
        }
    }

    // ---------------- Transitions -----------------

    fn prepare(&mut self, duration: u32) {
        self.countdown.cancel();
        let duration = clamp_duration(duration, &self.bounds);
        self.config.duration_seconds = duration;

        let targets: Vec<Product> = shuffle(self.catalog.products(), self.rng.rng())
            .into_iter()
            .take(self.layout.target_count)
            .collect();
        self.round = RoundState::new(targets, duration);
        self.shelf = self.build_shelf();
        self.summary = None;
        self.grid_locked = false;
        self.misses.clear();
        self.status = STATUS_IDLE.to_string();

        log::debug!(
            "round prepared: targets={:?} organized={}",
            self.round.targets().iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            self.config.organize_enabled
        );
        self.bus.push(GameEvent::RoundPrepared {
            shopping_list: self.shopping_list(),
            grid: self.grid_cells(),
            timer: self.timer_text(),
            status: self.status.clone(),
        });
    }

    fn start(&mut self) {
        if self.round.active {
            return;
        }
        let duration = clamp_duration(self.config.duration_seconds, &self.bounds);
        self.prepare(duration);
        self.round.active = true;
        self.countdown.start();
        self.status = format!("Boa sorte! Você tem {}.", seconds_label(duration));
        log::debug!("round started ({}s)", duration);
        self.bus.push(GameEvent::RoundStarted {
            duration_seconds: duration,
            status: self.status.clone(),
        });
    }

    fn pick(&mut self, product_id: &str, slots: Vec<usize>) {
        if !self.round.active || slots.is_empty() || self.round.is_found(product_id) {
            return;
        }
        let Some(product) = self.round.target(product_id).cloned() else {
            self.next_pulse_id += 1;
            let pulse = MissPulse {
                id: self.next_pulse_id,
                slots,
            };
            self.misses.push(pulse.clone());
            self.status = STATUS_WRONG.to_string();
            log::debug!("wrong pick: {}", product_id);
            self.bus.push(GameEvent::WrongPick {
                product_id: product_id.to_string(),
                pulse,
                status: self.status.clone(),
            });
            return;
        };

        self.round.mark_found(product_id);
        self.status = format!("Você encontrou {}.", product.name);
        self.bus.push(GameEvent::ProductFound {
            product_id: product.id.clone(),
            slots: self.slots_holding(product_id),
            status: self.status.clone(),
        });
        if self.round.all_found() {
            self.finish(true);
        }
    }

    fn finish(&mut self, won: bool) {
        if !self.round.active {
            return;
        }
        self.round.active = false;
        self.countdown.cancel();
        self.grid_locked = true;

        let summary = self.build_summary(won);
        log::info!(
            "round {}: {}/{} found, {}s of {}s left",
            if won { "won" } else { "lost" },
            summary.found_count,
            summary.target_count,
            summary.remaining_seconds,
            self.round.duration_seconds()
        );
        let status = if won { STATUS_WON } else { STATUS_LOST };
        self.status = status.to_string();
        self.summary = Some(summary.clone());
        self.bus.push(GameEvent::RoundFinished {
            summary,
            status: self.status.clone(),
        });
    }

    // ---------------- Helpers -----------------

    fn build_shelf(&mut self) -> Vec<Product> {
        slots::generate(
            self.round.targets(),
            ShelfMode::from_flag(self.config.organize_enabled),
            &self.catalog,
            &self.layout,
            self.rng.rng(),
        )
    }

    fn build_summary(&self, won: bool) -> RoundSummary {
        let items: Vec<SummaryItem> = self
            .round
            .targets()
            .iter()
            .map(|p| SummaryItem {
                product_id: p.id.clone(),
                name: p.name.clone(),
                found: self.round.is_found(&p.id),
            })
            .collect();
        RoundSummary {
            won,
            found_count: self.round.found_count(),
            target_count: items.len(),
            remaining_seconds: self.round.remaining_seconds,
            items,
        }
    }

    fn slots_holding(&self, product_id: &str) -> Vec<usize> {
        self.shelf
            .iter()
            .enumerate()
            .filter(|(_, p)| p.id == product_id)
            .map(|(i, _)| i)
            .collect()
    }

    // ---------------- View models -----------------

    pub fn phase(&self) -> Phase {
        if self.round.active {
            Phase::Active
        } else if let Some(summary) = &self.summary {
            Phase::Resolved { won: summary.won }
        } else {
            Phase::Idle
        }
    }

    pub fn shopping_list(&self) -> Vec<ShoppingEntry> {
        self.round
            .targets()
            .iter()
            .map(|p| ShoppingEntry {
                product_id: p.id.clone(),
                name: p.name.clone(),
                found: self.round.is_found(&p.id),
            })
            .collect()
    }

    pub fn grid_cells(&self) -> Vec<GridCell> {
        self.shelf
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let found = self.round.is_found(&p.id);
                GridCell {
                    index,
                    product_id: p.id.clone(),
                    name: p.name.clone(),
                    image: p.image.clone(),
                    found,
                    disabled: found || self.grid_locked,
                    missed: self.misses.iter().any(|m| m.slots.contains(&index)),
                }
            })
            .collect()
    }

    pub fn timer_text(&self) -> String {
        format_timer(self.round.remaining_seconds)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    pub fn config(&self) -> Configuration {
        self.config
    }

    pub fn layout(&self) -> ShelfLayout {
        self.layout
    }

    /// Token the page's interval should tick with; `None` when no countdown runs.
    pub fn tick_token(&self) -> Option<TickToken> {
        self.countdown.token()
    }

    /// Most recent wrong-pick highlight still showing.
    pub fn latest_miss(&self) -> Option<u64> {
        self.misses.last().map(|m| m.id)
    }

    /// Events produced by the last reduce.
    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }
}

impl Reducible for GameController {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        let events = new.apply(action);
        if events.is_empty() {
            return self;
        }
        new.version = new.version.wrapping_add(1);
        new.last_events = events;
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn controller(seed: u64) -> GameController {
        let layout = ShelfLayout::default();
        let catalog = Catalog::builtin(&layout).unwrap();
        GameController::new(
            Rc::new(catalog),
            layout,
            DurationBounds::default(),
            RngState::from_seed(seed),
        )
    }

    fn target_ids(c: &GameController) -> Vec<String> {
        c.round.targets().iter().map(|p| p.id.clone()).collect()
    }

    fn finished_count(events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::RoundFinished { .. }))
            .count()
    }

    /// Starts an organized round so the shelf is guaranteed to hold non-target products.
    fn started(seed: u64, duration: &str) -> (GameController, TickToken) {
        let mut c = controller(seed);
        c.toggle_organize_mode();
        c.set_duration(duration);
        c.start_round();
        let token = c.tick_token().unwrap();
        (c, token)
    }

    #[test]
    fn new_controller_is_idle_with_a_full_shelf() {
        let c = controller(1);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.timer_text(), "00:20");
        assert_eq!(c.status(), STATUS_IDLE);
        assert!(matches!(c.last_events(), [GameEvent::RoundPrepared { .. }]));

        let ids = target_ids(&c);
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), 5);
        assert_eq!(c.shelf.len(), 35);
        for id in &ids {
            assert!(c.shelf.iter().any(|p| &p.id == id));
        }
        assert!(c.grid_cells().iter().all(|cell| !cell.disabled && !cell.found));
    }

    #[test]
    fn every_round_draws_five_distinct_catalog_targets() {
        let mut c = controller(2);
        for _ in 0..30 {
            c.prepare_round(20);
            let ids = target_ids(&c);
            let unique: HashSet<&String> = ids.iter().collect();
            assert_eq!(unique.len(), 5);
            for id in &ids {
                assert!(c.catalog.get(id).is_some());
                assert!(c.shelf.iter().any(|p| &p.id == id));
            }
            assert_eq!(c.shelf.len(), 35);
        }
    }

    #[test]
    fn finding_all_targets_wins_once() {
        let (mut c, token) = started(3, "5");
        let mut events = Vec::new();
        let ids = target_ids(&c);
        for (i, id) in ids.iter().enumerate() {
            if i < 3 {
                events.extend(c.tick(token));
            }
            events.extend(c.on_product_click(id));
        }
        assert_eq!(c.phase(), Phase::Resolved { won: true });
        assert_eq!(finished_count(&events), 1);
        let summary = c.summary().unwrap();
        assert!(summary.won);
        assert_eq!(summary.found_count, 5);
        assert_eq!(summary.remaining_seconds, 2);
        assert_eq!(c.status(), STATUS_WON);

        // A late tick from the same interval does nothing.
        assert!(c.tick(token).is_empty());
        assert!(c.on_product_click(&ids[0]).is_empty());
        assert!(c.grid_cells().iter().all(|cell| cell.disabled));
    }

    #[test]
    fn timeout_loses_once_and_lists_every_target_missing() {
        let (mut c, token) = started(4, "5");
        let mut events = Vec::new();
        for _ in 0..5 {
            events.extend(c.tick(token));
        }
        assert_eq!(c.phase(), Phase::Resolved { won: false });
        assert_eq!(finished_count(&events), 1);
        assert_eq!(c.timer_text(), "00:00");
        assert_eq!(c.round.found_count(), 0);
        let summary = c.summary().unwrap();
        assert_eq!(summary.missing().count(), 5);
        assert_eq!(c.status(), STATUS_LOST);

        assert!(c.tick(token).is_empty());
        assert_eq!(c.round.remaining_seconds, 0);
        assert!(c.finish_round(true).is_empty());
    }

    #[test]
    fn wrong_pick_keeps_round_running() {
        let (mut c, _) = started(5, "30");
        let index = c
            .shelf
            .iter()
            .position(|p| !c.round.is_target(&p.id))
            .unwrap();
        let events = c.on_slot_click(index);
        assert!(matches!(events.as_slice(), [GameEvent::WrongPick { .. }]));
        assert_eq!(c.status(), STATUS_WRONG);
        assert_eq!(c.phase(), Phase::Active);
        assert_eq!(c.round.found_count(), 0);
        assert_eq!(c.round.remaining_seconds, 30);
        assert!(c.grid_cells()[index].missed);

        let pulse = c.latest_miss().unwrap();
        assert_eq!(
            c.clear_wrong_pick(pulse),
            vec![GameEvent::WrongPickCleared { pulse_id: pulse }]
        );
        assert!(!c.grid_cells()[index].missed);
        assert!(c.clear_wrong_pick(pulse).is_empty());
    }

    #[test]
    fn repeated_click_counts_once() {
        let (mut c, _) = started(6, "20");
        let id = target_ids(&c)[0].clone();
        let first = c.on_product_click(&id);
        assert!(matches!(first.as_slice(), [GameEvent::ProductFound { .. }]));
        assert!(c.on_product_click(&id).is_empty());
        assert_eq!(c.round.found_count(), 1);
        assert!(c.shopping_list()[0].found);
        for cell in c.grid_cells().iter().filter(|cell| cell.product_id == id) {
            assert!(cell.found && cell.disabled);
        }
    }

    #[test]
    fn found_event_marks_every_matching_slot() {
        let (mut c, _) = started(7, "20");
        let id = target_ids(&c)[1].clone();
        let expected: Vec<usize> = c.slots_holding(&id);
        match c.on_product_click(&id).as_slice() {
            [GameEvent::ProductFound { slots, status, .. }] => {
                assert_eq!(slots, &expected);
                assert!(status.starts_with("Você encontrou"));
            }
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[test]
    fn clicks_outside_an_active_round_are_ignored() {
        let mut c = controller(8);
        let id = target_ids(&c)[0].clone();
        assert!(c.on_product_click(&id).is_empty());
        assert!(c.on_slot_click(0).is_empty());

        c.start_round();
        assert!(c.on_product_click("not-on-the-shelf").is_empty());
        assert!(c.on_slot_click(999).is_empty());
        assert_eq!(c.status(), "Boa sorte! Você tem 20 segundos.");
    }

    #[test]
    fn start_while_active_is_a_no_op() {
        let (mut c, token) = started(9, "20");
        let targets = target_ids(&c);
        assert!(c.start_round().is_empty());
        assert_eq!(target_ids(&c), targets);
        assert_eq!(c.tick_token(), Some(token));
    }

    #[test]
    fn organize_toggle_only_while_not_active() {
        let mut c = controller(10);
        let targets = target_ids(&c);
        let events = c.toggle_organize_mode();
        assert!(matches!(
            events.as_slice(),
            [GameEvent::GridRegenerated { organized: true, .. }]
        ));
        assert!(c.config().organize_enabled);
        assert_eq!(target_ids(&c), targets);
        assert_eq!(c.timer_text(), "00:20");
        assert_eq!(c.status(), STATUS_ORGANIZED);

        c.start_round();
        assert!(c.toggle_organize_mode().is_empty());
        assert!(c.config().organize_enabled);
    }

    #[test]
    fn duration_change_applies_to_next_round() {
        let (mut c, token) = started(11, "30");
        c.tick(token);
        let events = c.set_duration("9999");
        assert!(matches!(
            events.as_slice(),
            [GameEvent::DurationChanged { duration_seconds: 600, .. }]
        ));
        assert_eq!(c.round.remaining_seconds, 29);
        assert_eq!(c.round.duration_seconds(), 30);

        c.finish_round(false);
        c.start_round();
        assert_eq!(c.round.remaining_seconds, 600);
        assert_eq!(c.round.duration_seconds(), 600);
        assert_eq!(c.timer_text(), "10:00");
    }

    #[test]
    fn duration_input_is_sanitized() {
        let mut c = controller(12);
        c.set_duration("3");
        assert_eq!(c.config().duration_seconds, 5);
        assert_eq!(c.timer_text(), "00:05");
        c.set_duration("9999");
        assert_eq!(c.config().duration_seconds, 600);
        c.set_duration("abc");
        assert_eq!(c.config().duration_seconds, 20);
    }

    #[test]
    fn singular_second_in_start_message() {
        let layout = ShelfLayout::default();
        let bounds = DurationBounds { default: 1, min: 1, max: 10 };
        let mut c = GameController::new(
            Rc::new(Catalog::builtin(&layout).unwrap()),
            layout,
            bounds,
            RngState::from_seed(13),
        );
        c.start_round();
        assert_eq!(c.status(), "Boa sorte! Você tem 1 segundo.");
    }

    #[test]
    fn play_again_replaces_the_tick_source() {
        let (mut c, old) = started(14, "5");
        for _ in 0..5 {
            c.tick(old);
        }
        let events = c.play_again();
        assert!(matches!(
            events.as_slice(),
            [GameEvent::RoundPrepared { .. }, GameEvent::RoundStarted { duration_seconds: 5, .. }]
        ));
        assert_eq!(c.phase(), Phase::Active);
        assert!(c.summary().is_none());
        assert!(c.tick(old).is_empty());
        let new = c.tick_token().unwrap();
        assert_ne!(new, old);
        assert_eq!(c.tick(new).len(), 1);
    }

    #[test]
    fn stale_wrong_pick_reset_is_harmless() {
        let (mut c, token) = started(15, "5");
        let index = c
            .shelf
            .iter()
            .position(|p| !c.round.is_target(&p.id))
            .unwrap();
        c.on_slot_click(index);
        let pulse = c.latest_miss().unwrap();
        for _ in 0..5 {
            c.tick(token);
        }
        c.play_again();
        assert!(c.clear_wrong_pick(pulse).is_empty());
        assert!(c.grid_cells().iter().all(|cell| !cell.missed));
    }

    #[test]
    fn dismiss_closes_result_without_starting() {
        let (mut c, token) = started(16, "5");
        assert!(c.dismiss_result().is_empty());
        for _ in 0..5 {
            c.tick(token);
        }
        assert_eq!(c.dismiss_result(), vec![GameEvent::ResultDismissed]);
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.tick_token().is_none());
        assert!(c.dismiss_result().is_empty());
        // The finished shelf stays locked until a new round is prepared.
        assert!(c.grid_cells().iter().all(|cell| cell.disabled));
    }

    #[test]
    fn reduce_skips_no_op_actions() {
        let c = Rc::new(controller(17));
        let same = c.clone().reduce(GameAction::DismissResult);
        assert!(Rc::ptr_eq(&c, &same));

        let started = c.clone().reduce(GameAction::Start);
        assert!(!Rc::ptr_eq(&c, &started));
        assert_eq!(started.version, c.version + 1);
        assert_eq!(started.phase(), Phase::Active);
        assert_eq!(started.last_events().len(), 2);

        let token = started.tick_token().unwrap();
        let ticked = started.clone().reduce(GameAction::Tick { token });
        assert_eq!(ticked.timer_text(), "00:19");
    }
}
