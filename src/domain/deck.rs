// Deck domain model - the full dashboard handed to the presentation layer
use super::control::ControlState;
use super::trend::Trend;
use chrono::{DateTime, Utc};
use serde::Serialize;

const RELAY_HINT_ON: &str = "Active and within limits";
const RELAY_HINT_OFF: &str = "Standby - tap to arm";

#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    pub hero: Hero,
    pub sensors: Vec<SensorCard>,
    pub trend: Trend,
    pub controls: ControlsView,
    pub activity: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub overline: String,
    pub title: String,
    pub subtitle: String,
    pub status: String,
    pub status_hint: String,
    pub stats: Vec<HeroStat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SensorCard {
    pub label: String,
    pub value: String,
    pub detail: String,
    pub accent: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub label: String,
    pub time: String,
    pub tone: String,
    pub chip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayView {
    pub key: String,
    pub label: String,
    pub energized: bool,
    pub hint: String,
}

impl RelayView {
    pub fn new(key: &str, energized: bool) -> Self {
        let hint = if energized { RELAY_HINT_ON } else { RELAY_HINT_OFF };
        Self {
            key: key.to_string(),
            label: key.to_uppercase(),
            energized,
            hint: hint.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlsView {
    pub auto_mode: bool,
    pub mode_label: String,
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
    pub relays: Vec<RelayView>,
}

impl ControlsView {
    pub fn new(state: &ControlState, revision: u64, updated_at: DateTime<Utc>) -> Self {
        let mode_label = if state.auto_mode { "Auto" } else { "Manual" };
        Self {
            auto_mode: state.auto_mode,
            mode_label: mode_label.to_string(),
            revision,
            updated_at,
            relays: state
                .relays
                .iter()
                .map(|(key, energized)| RelayView::new(key, energized))
                .collect(),
        }
    }
}
