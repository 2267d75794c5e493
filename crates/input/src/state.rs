use crate::action::Action;
use crate::bindings::KeyBindings;
use cityscape_common::MoveDirection;
use std::collections::BTreeSet;

/// Actions sampled for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameActions {
    /// Held movement directions, each at most once, in `MoveDirection::ALL` order.
    pub moves: Vec<MoveDirection>,
    /// The light toggle key went down since the last sample.
    pub toggle_light: bool,
    /// The quit key went down since the last sample.
    pub quit: bool,
}

impl FrameActions {
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Keyboard state between frames: which keys are down, and which went down
/// since the previous sample.
#[derive(Debug, Default)]
pub struct InputState {
    held: BTreeSet<String>,
    pressed: BTreeSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Repeats of an already-held key are not fresh presses.
    pub fn handle_key(&mut self, key: &str, pressed: bool) {
        if pressed {
            if self.held.insert(key.to_string()) {
                self.pressed.insert(key.to_string());
            }
        } else {
            self.held.remove(key);
        }
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Sample this frame's actions and clear the fresh-press set.
    pub fn frame_actions(&mut self, bindings: &KeyBindings) -> FrameActions {
        let mut held_dirs = BTreeSet::new();
        for key in &self.held {
            if let Some(Action::Move(dir)) = bindings.lookup(key) {
                held_dirs.insert(dir);
            }
        }

        let mut actions = FrameActions {
            moves: MoveDirection::ALL
                .into_iter()
                .filter(|d| held_dirs.contains(d))
                .collect(),
            ..FrameActions::default()
        };

        for key in std::mem::take(&mut self.pressed) {
            match bindings.lookup(&key) {
                Some(Action::ToggleLight) => actions.toggle_light = true,
                Some(Action::Quit) => actions.quit = true,
                Some(Action::Move(_)) => {}
                None => tracing::trace!("unbound key {key}"),
            }
        }

        actions
    }
}
