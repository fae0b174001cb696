// Relay and mode control state, with the reducer that drives it
use super::error::DeckError;
use indexmap::IndexMap;

/// Relay name to energized flag, iterated in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayState(IndexMap<String, bool>);

impl RelayState {
    /// Build from `(name, energized)` pairs, rejecting duplicate names.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        let mut relays = IndexMap::new();
        for (name, energized) in pairs {
            let name = name.into();
            if relays.contains_key(&name) {
                return Err(DeckError::InvalidInput(format!("duplicate relay {}", name)));
            }
            relays.insert(name, energized);
        }
        Ok(Self(relays))
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this state with `key` negated. Never inserts a missing key.
    pub fn flipped(&self, key: &str) -> Result<Self, DeckError> {
        let mut next = self.clone();
        match next.0.get_mut(key) {
            Some(energized) => {
                *energized = !*energized;
                Ok(next)
            }
            None => Err(DeckError::KeyNotFound(key.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub relays: RelayState,
    /// `true` = automatic, `false` = manual.
    pub auto_mode: bool,
}

impl ControlState {
    pub fn new(relays: RelayState, auto_mode: bool) -> Self {
        Self { relays, auto_mode }
    }

    /// Copy of this state with the mode flag negated. Total.
    pub fn mode_flipped(&self) -> Self {
        Self {
            relays: self.relays.clone(),
            auto_mode: !self.auto_mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FlipRelay(String),
    FlipMode,
}

/// Pure state transition. A failed action leaves the caller's state untouched.
pub fn reduce(state: &ControlState, action: &Action) -> Result<ControlState, DeckError> {
    match action {
        Action::FlipRelay(key) => Ok(ControlState {
            relays: state.relays.flipped(key)?,
            auto_mode: state.auto_mode,
        }),
        Action::FlipMode => Ok(state.mode_flipped()),
    }
}
