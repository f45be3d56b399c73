use serde::{Deserialize, Serialize};

/// One line of the shopping list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingEntry {
    pub product_id: String,
    pub name: String,
    pub found: bool,
}

/// One shelf cell as the page should draw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub index: usize,
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub found: bool,
    /// Clicks on this cell do nothing (already found, or the round is over).
    pub disabled: bool,
    /// Wrong-pick highlight is showing.
    pub missed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub product_id: String,
    pub name: String,
    pub found: bool,
}

/// End-of-round breakdown shown in the result overlay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub won: bool,
    pub found_count: usize,
    pub target_count: usize,
    pub remaining_seconds: u32,
    pub items: Vec<SummaryItem>,
}

impl RoundSummary {
    pub fn missing(&self) -> impl Iterator<Item = &SummaryItem> {
        self.items.iter().filter(|item| !item.found)
    }
}

/// One wrong-pick highlight. The id lets a delayed reset clear exactly this highlight.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissPulse {
    pub id: u64,
    pub slots: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GameEvent {
    RoundPrepared {
        shopping_list: Vec<ShoppingEntry>,
        grid: Vec<GridCell>,
        timer: String,
        status: String,
    },
    RoundStarted {
        duration_seconds: u32,
        status: String,
    },
    TimerUpdated {
        remaining_seconds: u32,
        timer: String,
    },
    ProductFound {
        product_id: String,
        slots: Vec<usize>,
        status: String,
    },
    WrongPick {
        product_id: String,
        pulse: MissPulse,
        status: String,
    },
    WrongPickCleared {
        pulse_id: u64,
    },
    RoundFinished {
        summary: RoundSummary,
        status: String,
    },
    GridRegenerated {
        grid: Vec<GridCell>,
        organized: bool,
        status: String,
    },
    DurationChanged {
        duration_seconds: u32,
        timer: String,
    },
    ResultDismissed,
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::RoundPrepared { .. } => "round_prepared",
            GameEvent::RoundStarted { .. } => "round_started",
            GameEvent::TimerUpdated { .. } => "timer_updated",
            GameEvent::ProductFound { .. } => "product_found",
            GameEvent::WrongPick { .. } => "wrong_pick",
            GameEvent::WrongPickCleared { .. } => "wrong_pick_cleared",
            GameEvent::RoundFinished { .. } => "round_finished",
            GameEvent::GridRegenerated { .. } => "grid_regenerated",
            GameEvent::DurationChanged { .. } => "duration_changed",
            GameEvent::ResultDismissed => "result_dismissed",
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct EventBus {
    queue: Vec<GameEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.queue)
    }
}
