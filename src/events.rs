//! Key map and held-key tracking.
//!
//! Emacs-style bindings: Ctrl+A/E line ends, Ctrl+B/F and Alt+B/F caret,
//! Ctrl+W/Alt+D word delete, Ctrl+K/U line delete, Ctrl+V/Y paste,
//! Ctrl+N/P list, Enter launch, Esc quit.

use std::collections::{HashMap, HashSet};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::actions::Action;

pub fn key_to_action(event: &KeyEvent) -> Option<Action> {
    let (code, mods) = (event.code, event.modifiers);
    let ctrl = mods.contains(KeyModifiers::CONTROL);
    let alt = mods.contains(KeyModifiers::ALT);

    let action = match code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Launch,
        KeyCode::Backspace if alt || ctrl => Action::DeleteWordBack,
        KeyCode::Backspace => Action::DeleteBack,
        KeyCode::Delete => Action::DeleteForward,
        KeyCode::Left if ctrl || alt => Action::MoveWordLeft,
        KeyCode::Right if ctrl || alt => Action::MoveWordRight,
        KeyCode::Left => Action::MoveLeft,
        KeyCode::Right => Action::MoveRight,
        KeyCode::Home => Action::MoveStart,
        KeyCode::End => Action::MoveEnd,
        KeyCode::Up => Action::ListUp,
        KeyCode::Down => Action::ListDown,
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'c' => Action::Quit,
            'h' => Action::DeleteBack,
            'd' => Action::DeleteForward,
            'w' => Action::DeleteWordBack,
            'k' => Action::DeleteToEnd,
            'u' => Action::ClearInput,
            'v' | 'y' => Action::Paste,
            'b' => Action::MoveLeft,
            'f' => Action::MoveRight,
            'a' => Action::MoveStart,
            'e' => Action::MoveEnd,
            'p' => Action::ListUp,
            'n' => Action::ListDown,
            _ => return None,
        },
        KeyCode::Char(c) if alt => match c.to_ascii_lowercase() {
            'b' => Action::MoveWordLeft,
            'f' => Action::MoveWordRight,
            'd' => Action::DeleteWordForward,
            _ => return None,
        },
        KeyCode::Char(c) if !mods.contains(KeyModifiers::SUPER) && !c.is_control() => Action::Char(c),
        _ => return None,
    };
    Some(action)
}

/// What a single key event means once bindings are applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    /// Acts once: chars, launch, quit.
    Once(Action),
    /// Pressed edge of a repeatable action.
    Press(Action),
    /// The key of a repeatable action went up.
    Release(Action),
}

/// Tracks which repeatable actions are held.
///
/// With release reporting, `Press` starts a hold, `Release` ends it and the
/// terminal's own `Repeat` events are dropped so the repeaters set the pace.
/// Without it nothing is ever known to be held, so each `Press`/`Repeat` is
/// a separate edge.
#[derive(Debug, Default)]
pub struct InputTracker {
    release_reporting: bool,
    /// Keyed by key code: a release may arrive with different modifiers
    /// than the press (Ctrl let go first).
    held: HashMap<KeyCode, Action>,
}

impl InputTracker {
    pub fn new(release_reporting: bool) -> Self {
        Self { release_reporting, held: HashMap::new() }
    }

    pub fn on_key(&mut self, event: &KeyEvent) -> Option<KeyInput> {
        if event.kind == KeyEventKind::Release {
            return self.held.remove(&event.code).map(KeyInput::Release);
        }
        let action = key_to_action(event)?;
        if !action.repeats() {
            // Chars are repeated by the terminal; Enter and Esc act once.
            let skip = event.kind == KeyEventKind::Repeat && !matches!(action, Action::Char(_));
            return (!skip).then_some(KeyInput::Once(action));
        }
        if !self.release_reporting {
            return Some(KeyInput::Press(action));
        }
        match event.kind {
            KeyEventKind::Press => {
                self.held.insert(event.code, action);
                Some(KeyInput::Press(action))
            }
            _ => None,
        }
    }

    pub fn is_held(&self, action: &Action) -> bool {
        self.held.values().any(|a| a == action)
    }

    /// Distinct held actions.
    pub fn held(&self) -> HashSet<Action> {
        self.held.values().copied().collect()
    }

    /// Focus loss: no key can be trusted to still be down.
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

/// Mouse input in terminal cells, stripped of crossterm details.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MouseInput {
    /// Positive scrolls towards the end of the list.
    Wheel(f32),
    Move { column: u16, row: u16 },
    Press { column: u16, row: u16 },
    Drag { column: u16, row: u16 },
    Release,
}

pub fn mouse_to_input(event: &MouseEvent) -> Option<MouseInput> {
    let (column, row) = (event.column, event.row);
    let input = match event.kind {
        MouseEventKind::ScrollDown => MouseInput::Wheel(1.0),
        MouseEventKind::ScrollUp => MouseInput::Wheel(-1.0),
        MouseEventKind::Moved => MouseInput::Move { column, row },
        MouseEventKind::Down(MouseButton::Left) => MouseInput::Press { column, row },
        MouseEventKind::Drag(MouseButton::Left) => MouseInput::Drag { column, row },
        MouseEventKind::Up(MouseButton::Left) => MouseInput::Release,
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    fn kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_editing_bindings() {
        let ctrl = KeyModifiers::CONTROL;
        let alt = KeyModifiers::ALT;
        assert_eq!(key_to_action(&key(KeyCode::Char('w'), ctrl)), Some(Action::DeleteWordBack));
        assert_eq!(key_to_action(&key(KeyCode::Char('d'), alt)), Some(Action::DeleteWordForward));
        assert_eq!(key_to_action(&key(KeyCode::Char('k'), ctrl)), Some(Action::DeleteToEnd));
        assert_eq!(key_to_action(&key(KeyCode::Char('u'), ctrl)), Some(Action::ClearInput));
        assert_eq!(key_to_action(&key(KeyCode::Char('v'), ctrl)), Some(Action::Paste));
        assert_eq!(key_to_action(&key(KeyCode::Backspace, alt)), Some(Action::DeleteWordBack));
        assert_eq!(key_to_action(&key(KeyCode::Left, ctrl)), Some(Action::MoveWordLeft));
        assert_eq!(key_to_action(&key(KeyCode::Char('n'), ctrl)), Some(Action::ListDown));
        assert_eq!(key_to_action(&key(KeyCode::Char('p'), ctrl)), Some(Action::ListUp));
        assert_eq!(key_to_action(&key(KeyCode::Char('c'), ctrl)), Some(Action::Quit));
        assert_eq!(key_to_action(&key(KeyCode::Char('z'), ctrl)), None);
    }

    #[test]
    fn plain_and_shifted_chars_are_typed() {
        assert_eq!(
            key_to_action(&key(KeyCode::Char('F'), KeyModifiers::SHIFT)),
            Some(Action::Char('F'))
        );
        assert_eq!(key_to_action(&key(KeyCode::Char(' '), KeyModifiers::NONE)), Some(Action::Char(' ')));
    }

    #[test]
    fn release_reporting_tracks_holds() {
        let mut tracker = InputTracker::new(true);
        assert_eq!(
            tracker.on_key(&kind(KeyCode::Backspace, KeyEventKind::Press)),
            Some(KeyInput::Press(Action::DeleteBack))
        );
        assert!(tracker.is_held(&Action::DeleteBack));

        assert_eq!(tracker.on_key(&kind(KeyCode::Backspace, KeyEventKind::Repeat)), None);
        assert!(tracker.is_held(&Action::DeleteBack));

        assert_eq!(
            tracker.on_key(&kind(KeyCode::Backspace, KeyEventKind::Release)),
            Some(KeyInput::Release(Action::DeleteBack))
        );
        assert!(tracker.held().is_empty());
    }

    #[test]
    fn without_release_reporting_every_repeat_is_an_edge() {
        let mut tracker = InputTracker::new(false);
        assert_eq!(
            tracker.on_key(&kind(KeyCode::Down, KeyEventKind::Press)),
            Some(KeyInput::Press(Action::ListDown))
        );
        assert_eq!(
            tracker.on_key(&kind(KeyCode::Down, KeyEventKind::Repeat)),
            Some(KeyInput::Press(Action::ListDown))
        );
        assert!(!tracker.is_held(&Action::ListDown));
    }

    #[test]
    fn once_keys_skip_release_events() {
        let mut tracker = InputTracker::new(true);
        let f = Some(KeyInput::Once(Action::Char('f')));
        assert_eq!(tracker.on_key(&kind(KeyCode::Char('f'), KeyEventKind::Press)), f);
        assert_eq!(tracker.on_key(&kind(KeyCode::Char('f'), KeyEventKind::Repeat)), f);
        assert_eq!(tracker.on_key(&kind(KeyCode::Char('f'), KeyEventKind::Release)), None);
        assert_eq!(tracker.on_key(&kind(KeyCode::Enter, KeyEventKind::Repeat)), None);
    }

    #[test]
    fn release_matches_key_even_without_modifier() {
        let mut tracker = InputTracker::new(true);
        let press = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(tracker.on_key(&press), Some(KeyInput::Press(Action::DeleteWordBack)));
        assert_eq!(
            tracker.on_key(&kind(KeyCode::Char('w'), KeyEventKind::Release)),
            Some(KeyInput::Release(Action::DeleteWordBack))
        );
        assert!(!tracker.is_held(&Action::DeleteWordBack));
    }

    #[test]
    fn maps_mouse_events() {
        let event = |kind| MouseEvent { kind, column: 4, row: 7, modifiers: KeyModifiers::NONE };
        assert_eq!(mouse_to_input(&event(MouseEventKind::ScrollUp)), Some(MouseInput::Wheel(-1.0)));
        assert_eq!(
            mouse_to_input(&event(MouseEventKind::Down(MouseButton::Left))),
            Some(MouseInput::Press { column: 4, row: 7 })
        );
        assert_eq!(mouse_to_input(&event(MouseEventKind::Down(MouseButton::Right))), None);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut tracker = InputTracker::new(true);
        tracker.on_key(&kind(KeyCode::Left, KeyEventKind::Press));
        tracker.release_all();
        assert!(!tracker.is_held(&Action::MoveLeft));
    }
}
