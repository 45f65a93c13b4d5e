use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::app::{Action, View};

/// A key combination
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Context for keybindings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Global,
    /// Namespace list and workload grid
    Browse,
    /// Analysis view
    LogView,
}

impl KeyContext {
    pub fn for_view(view: View) -> Self {
        match view {
            View::Namespaces | View::Workloads => Self::Browse,
            View::Analysis => Self::LogView,
        }
    }
}

/// Keybinding configuration
pub struct KeyBindings {
    bindings: HashMap<KeyContext, HashMap<KeyBinding, Action>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        // Global bindings
        let mut global = HashMap::new();
        global.insert(KeyBinding::new(KeyCode::Char('q')), Action::Quit);
        global.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        global.insert(KeyBinding::new(KeyCode::Esc), Action::Back);
        global.insert(KeyBinding::new(KeyCode::Backspace), Action::Back);
        global.insert(KeyBinding::new(KeyCode::Char('r')), Action::Refresh);
        global.insert(KeyBinding::new(KeyCode::Char('t')), Action::ToggleAutoRefresh);
        global.insert(KeyBinding::new(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(KeyBinding::shift(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(KeyBinding::new(KeyCode::Char('x')), Action::DismissError);
        bindings.insert(KeyContext::Global, global);

        // Lists and grid
        let mut browse = HashMap::new();
        browse.insert(KeyBinding::new(KeyCode::Char('k')), Action::Up);
        browse.insert(KeyBinding::new(KeyCode::Up), Action::Up);
        browse.insert(KeyBinding::new(KeyCode::Char('j')), Action::Down);
        browse.insert(KeyBinding::new(KeyCode::Down), Action::Down);
        browse.insert(KeyBinding::new(KeyCode::Char('h')), Action::Left);
        browse.insert(KeyBinding::new(KeyCode::Left), Action::Left);
        browse.insert(KeyBinding::new(KeyCode::Char('l')), Action::Right);
        browse.insert(KeyBinding::new(KeyCode::Right), Action::Right);
        browse.insert(KeyBinding::new(KeyCode::Home), Action::First);
        browse.insert(KeyBinding::new(KeyCode::Char('g')), Action::First);
        browse.insert(KeyBinding::new(KeyCode::End), Action::Last);
        browse.insert(KeyBinding::shift(KeyCode::Char('G')), Action::Last);
        browse.insert(KeyBinding::new(KeyCode::Enter), Action::Select);
        bindings.insert(KeyContext::Browse, browse);

        // Log view scrolls back from the tail
        let mut log_view = HashMap::new();
        log_view.insert(KeyBinding::new(KeyCode::Char('k')), Action::Up);
        log_view.insert(KeyBinding::new(KeyCode::Up), Action::Up);
        log_view.insert(KeyBinding::new(KeyCode::PageUp), Action::Up);
        log_view.insert(KeyBinding::new(KeyCode::Char('j')), Action::Down);
        log_view.insert(KeyBinding::new(KeyCode::Down), Action::Down);
        log_view.insert(KeyBinding::new(KeyCode::PageDown), Action::Down);
        log_view.insert(KeyBinding::new(KeyCode::Home), Action::First);
        log_view.insert(KeyBinding::new(KeyCode::Char('g')), Action::First);
        log_view.insert(KeyBinding::new(KeyCode::End), Action::Last);
        log_view.insert(KeyBinding::shift(KeyCode::Char('G')), Action::Last);
        bindings.insert(KeyContext::LogView, log_view);

        Self { bindings }
    }

    /// Look up action for key event in given context
    pub fn get_action(&self, context: KeyContext, key: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(key);

        // First check context-specific bindings
        if let Some(action) = self
            .bindings
            .get(&context)
            .and_then(|context_bindings| context_bindings.get(&binding))
        {
            return Some(*action);
        }

        // Fall back to global bindings
        self.bindings
            .get(&KeyContext::Global)?
            .get(&binding)
            .copied()
    }

    /// Action for a key press in the given view
    pub fn action_for(&self, view: View, key: &KeyEvent) -> Option<Action> {
        self.get_action(KeyContext::for_view(view), key)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}
