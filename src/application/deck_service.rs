// Deck service - Use case for building the dashboard and flipping controls
use crate::application::control_store::{ControlSnapshot, ControlStore};
use crate::domain::control::{ControlState, RelayState};
use crate::domain::deck::{ActivityEntry, ControlsView, Deck, Hero, HeroStat, SensorCard};
use crate::domain::error::DeckError;
use crate::domain::trend::{Trend, TrendCopy};
use crate::infrastructure::config::DeckConfig;
use std::sync::Arc;
use tokio::sync::watch;

/// Static dashboard content, fixed for the lifetime of the service.
#[derive(Debug)]
struct DeckContent {
    hero: Hero,
    sensors: Vec<SensorCard>,
    trend: Trend,
    activity: Vec<ActivityEntry>,
}

#[derive(Clone)]
pub struct DeckService {
    content: Arc<DeckContent>,
    store: ControlStore,
}

impl DeckService {
    /// Validate the configuration, normalize the trend once, and mount the
    /// control store with the configured initial relays and mode.
    pub fn new(config: &DeckConfig) -> Result<Self, DeckError> {
        let copy = TrendCopy {
            title: config.trend.title.clone(),
            hint: config.trend.hint.clone(),
            unit: config.trend.unit.clone(),
            footer_hint: config.trend.footer_hint.clone(),
            footer_chip: config.trend.footer_chip.clone(),
        };
        let trend = Trend::new(copy, &config.trend.readings)?;

        let relays = RelayState::from_pairs(
            config
                .controls
                .relays
                .iter()
                .map(|r| (r.name.clone(), r.energized)),
        )?;

        if relays.is_empty() {
            tracing::warn!("Deck configured without relays");
        }

        let hero = Hero {
            overline: config.hero.overline.clone(),
            title: config.hero.title.clone(),
            subtitle: config.hero.subtitle.clone(),
            status: config.hero.status.clone(),
            status_hint: config.hero.status_hint.clone(),
            stats: config
                .hero
                .stats
                .iter()
                .map(|s| HeroStat {
                    label: s.label.clone(),
                    value: s.value.clone(),
                })
                .collect(),
        };

        let sensors = config
            .sensors
            .iter()
            .map(|s| SensorCard {
                label: s.label.clone(),
                value: s.value.clone(),
                detail: s.detail.clone(),
                accent: s.accent.clone(),
            })
            .collect();

        let activity = config
            .activity
            .iter()
            .map(|a| ActivityEntry {
                label: a.label.clone(),
                time: a.time.clone(),
                tone: a.tone.clone(),
                chip: a.chip.clone(),
            })
            .collect();

        tracing::debug!(
            "Mounted deck with {} bars, {} relays, peak {}",
            trend.bars.len(),
            relays.len(),
            trend.peak
        );

        Ok(Self {
            content: Arc::new(DeckContent {
                hero,
                sensors,
                trend,
                activity,
            }),
            store: ControlStore::new(ControlState::new(relays, config.controls.auto_mode)),
        })
    }

    pub fn deck(&self) -> Deck {
        self.deck_from(&self.store.snapshot())
    }

    pub fn deck_from(&self, snapshot: &ControlSnapshot) -> Deck {
        Deck {
            hero: self.content.hero.clone(),
            sensors: self.content.sensors.clone(),
            trend: self.content.trend.clone(),
            controls: Self::controls_view(snapshot),
            activity: self.content.activity.clone(),
        }
    }

    pub fn trend(&self) -> &Trend {
        &self.content.trend
    }

    pub fn controls(&self) -> ControlsView {
        Self::controls_view(&self.store.snapshot())
    }

    pub fn controls_view(snapshot: &ControlSnapshot) -> ControlsView {
        ControlsView::new(&snapshot.state, snapshot.revision, snapshot.updated_at)
    }

    pub fn flip_relay(&self, key: &str) -> Result<ControlsView, DeckError> {
        let snapshot = self.store.flip_relay(key)?;
        Ok(Self::controls_view(&snapshot))
    }

    pub fn flip_mode(&self) -> ControlsView {
        Self::controls_view(&self.store.flip_mode())
    }

    pub fn subscribe(&self) -> watch::Receiver<ControlSnapshot> {
        self.store.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::tests::sample_config;
    use crate::infrastructure::config::RelayConfig;

    #[test]
    fn test_deck_from_sample_config() {
        let service = DeckService::new(&sample_config()).unwrap();
        let deck = service.deck();

        assert_eq!(deck.hero.title, "Control Deck");
        assert_eq!(deck.sensors.len(), 4);
        assert_eq!(deck.activity[0].label, "Pump primed");
        assert!(deck.activity.iter().all(|a| a.chip == "Logged"));
        assert_eq!(deck.trend.copy.footer_hint, "Holding smooth across recent samples");
        assert_eq!(deck.trend.copy.footer_chip, "Safe load");
        assert_eq!(deck.trend.peak, 12.7);
        assert_eq!(deck.trend.bars[5].height, 90.0);

        let relays: Vec<(&str, bool)> = deck
            .controls
            .relays
            .iter()
            .map(|r| (r.key.as_str(), r.energized))
            .collect();
        assert_eq!(
            relays,
            [("pump", true), ("fan", false), ("lights", true), ("aux", false)]
        );
        assert_eq!(deck.controls.mode_label, "Auto");
        assert_eq!(deck.controls.revision, 0);
    }

    #[test]
    fn test_trend_is_computed_once() {
        let service = DeckService::new(&sample_config()).unwrap();
        service.flip_mode();
        assert!(std::ptr::eq(service.trend(), service.clone().trend()));
        assert_eq!(service.deck().trend, *service.trend());
    }

    #[test]
    fn test_flips_show_up_in_deck() {
        let service = DeckService::new(&sample_config()).unwrap();

        let controls = service.flip_relay("fan").unwrap();
        assert!(controls.relays[1].energized);
        assert_eq!(controls.relays[1].hint, "Active and within limits");

        let controls = service.flip_mode();
        assert_eq!(controls.mode_label, "Manual");
        assert_eq!(controls.revision, 2);

        assert_eq!(service.deck().controls, service.controls());
    }

    #[test]
    fn test_unknown_relay_is_key_not_found() {
        let service = DeckService::new(&sample_config()).unwrap();
        assert_eq!(
            service.flip_relay("heater").unwrap_err(),
            DeckError::KeyNotFound("heater".to_string())
        );
        assert_eq!(service.controls().revision, 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = sample_config();
        config.trend.readings.clear();
        assert!(matches!(DeckService::new(&config), Err(DeckError::InvalidInput(_))));

        let mut config = sample_config();
        config.controls.relays.push(RelayConfig {
            name: "pump".to_string(),
            energized: false,
        });
        assert!(matches!(DeckService::new(&config), Err(DeckError::InvalidInput(_))));
    }
}
