use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DeckConfig {
    pub server: ServerSettings,
    pub hero: HeroConfig,
    #[serde(default)]
    pub sensors: Vec<SensorConfig>,
    pub trend: TrendConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub activity: Vec<ActivityConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeroConfig {
    pub overline: String,
    pub title: String,
    pub subtitle: String,
    pub status: String,
    pub status_hint: String,
    #[serde(default)]
    pub stats: Vec<StatConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatConfig {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SensorConfig {
    pub label: String,
    pub value: String,
    pub detail: String,
    pub accent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrendConfig {
    pub title: String,
    pub hint: String,
    pub unit: String,
    #[serde(default)]
    pub footer_hint: String,
    #[serde(default)]
    pub footer_chip: String,
    pub readings: Vec<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ControlsConfig {
    #[serde(default = "default_auto_mode")]
    pub auto_mode: bool,
    /// Array rather than a table so definition order survives loading.
    #[serde(default)]
    pub relays: Vec<RelayConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    pub name: String,
    #[serde(default)]
    pub energized: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ActivityConfig {
    pub label: String,
    pub time: String,
    pub tone: String,
    #[serde(default = "default_activity_chip")]
    pub chip: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            auto_mode: default_auto_mode(),
            relays: Vec::new(),
        }
    }
}

fn default_auto_mode() -> bool {
    true
}

fn default_activity_chip() -> String {
    "Logged".to_string()
}

/// Load `config/deck.toml`, overridable with `DECK_*` environment variables
/// (`DECK_SERVER__BIND=127.0.0.1:9000`).
pub fn load_deck_config() -> anyhow::Result<DeckConfig> {
    build_deck_config(config::File::with_name("config/deck"), None)
}

/// Layer `DECK_*` variables over `file`. With `env` unset the process
/// environment is read.
pub fn build_deck_config<S>(
    file: S,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<DeckConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("DECK")
                .prefix_separator("_")
                .separator("__")
                .source(env),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
