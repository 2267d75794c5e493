use crate::action::Action;
use cityscape_common::MoveDirection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Errors from loading a key bindings file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key name to action map.
///
/// Serialized as a flat JSON object, e.g.
/// `{"KeyW": {"move": "forward"}, "KeyL": "toggle_light"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    bindings: BTreeMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = BTreeMap::from([
            ("KeyW".to_string(), Action::Move(MoveDirection::Forward)),
            ("KeyS".to_string(), Action::Move(MoveDirection::Backward)),
            ("KeyA".to_string(), Action::Move(MoveDirection::Left)),
            ("KeyD".to_string(), Action::Move(MoveDirection::Right)),
            ("KeyQ".to_string(), Action::Move(MoveDirection::Up)),
            ("KeyE".to_string(), Action::Move(MoveDirection::Down)),
            ("KeyL".to_string(), Action::ToggleLight),
            ("Escape".to_string(), Action::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Read a bindings file. The file replaces the defaults entirely.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let bindings: Self = serde_json::from_str(&data)?;
        tracing::debug!(
            "loaded {} key bindings from {}",
            bindings.len(),
            path.as_ref().display()
        );
        Ok(bindings)
    }

    /// Bind `key` to `action`, returning the action it was previously bound to.
    pub fn bind(&mut self, key: impl Into<String>, action: Action) -> Option<Action> {
        self.bindings.insert(key.into(), action)
    }

    /// Look up the action for a key name.
    pub fn lookup(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Action)> {
        self.bindings.iter().map(|(k, a)| (k.as_str(), *a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_cover_every_direction() {
        let keys = KeyBindings::default();
        for dir in MoveDirection::ALL {
            assert!(
                keys.iter().any(|(_, a)| a == Action::Move(dir)),
                "{dir:?} unbound"
            );
        }
        assert_eq!(keys.lookup("KeyL"), Some(Action::ToggleLight));
        assert_eq!(keys.lookup("Escape"), Some(Action::Quit));
        assert_eq!(keys.lookup("KeyZ"), None);
    }

    #[test]
    fn rebind_returns_previous() {
        let mut keys = KeyBindings::default();
        let old = keys.bind("KeyW", Action::Move(MoveDirection::Up));
        assert_eq!(old, Some(Action::Move(MoveDirection::Forward)));
        assert_eq!(keys.lookup("KeyW"), Some(Action::Move(MoveDirection::Up)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"ArrowUp": {{"move": "forward"}}, "KeyT": "toggle_light", "Escape": "quit"}}"#
        )
        .unwrap();

        let keys = KeyBindings::load(file.path()).unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(
            keys.lookup("ArrowUp"),
            Some(Action::Move(MoveDirection::Forward))
        );
        assert_eq!(keys.lookup("KeyT"), Some(Action::ToggleLight));
        assert_eq!(keys.lookup("KeyW"), None);
    }

    #[test]
    fn load_rejects_unknown_action() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"KeyX": "explode"}}"#).unwrap();
        assert!(matches!(
            KeyBindings::load(file.path()),
            Err(InputError::Json(_))
        ));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            KeyBindings::load(dir.path().join("nope.json")),
            Err(InputError::Io(_))
        ));
    }
}
