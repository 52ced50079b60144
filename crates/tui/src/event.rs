//! Event handling and key mappings.
//!
//! This module polls the terminal and converts crossterm events into board
//! [`Message`]s. Key bindings depend on who owns input: while a form is open,
//! printable keys edit text instead of triggering board actions.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kancli_protocol::{Action, EditKey, Message};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to a board message.
///
/// `form_open` selects the form key bindings. Resize events are always
/// forwarded. Returns `None` for unbound keys and other events.
#[must_use]
pub fn event_to_message(event: &Event, form_open: bool) -> Option<Message> {
    match event {
        Event::Key(key) if form_open => key_to_form_message(*key),
        Event::Key(key) => key_to_action(*key).map(Message::Action),
        Event::Resize(width, height) => Some(Message::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a key event to a board action.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `n` | New task |
/// | `e` | Edit task |
/// | `d` | Delete task |
/// | `↑` or `k` | Up |
/// | `↓` or `j` | Down |
/// | `←` or `h` | Focus left |
/// | `→` or `l` | Focus right |
/// | `Enter` | Move task forward |
/// | `?` | Toggle help |
/// | `q` or `Ctrl+C` | Quit |
/// | `Esc` | Back |
#[must_use]
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_ctrl_c(&key) {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('n') => Some(Action::New),
        KeyCode::Char('e') => Some(Action::Edit),
        KeyCode::Char('d') => Some(Action::Delete),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Back),
        _ => None,
    }
}

/// Converts a key event to a message for an open form.
///
/// # Key Bindings (Form Mode)
///
/// | Key | Message |
/// |-----|---------|
/// | `Enter` | Confirm |
/// | `Esc` | Back |
/// | `Ctrl+C` | Quit |
/// | Any char | Insert |
/// | `Backspace` / `Delete` | Erase |
/// | `←` `→` `Home` `End` | Move cursor |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_ctrl_c(&key) {
        return Some(Message::Action(Action::Quit));
    }

    let edit = match key.code {
        KeyCode::Enter => return Some(Message::Action(Action::Confirm)),
        KeyCode::Esc => return Some(Message::Action(Action::Back)),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => EditKey::Char(ch),
        KeyCode::Backspace => EditKey::Backspace,
        KeyCode::Delete => EditKey::Delete,
        KeyCode::Left => EditKey::Left,
        KeyCode::Right => EditKey::Right,
        KeyCode::Home => EditKey::Home,
        KeyCode::End => EditKey::End,
        _ => return None,
    };
    Some(Message::Edit(edit))
}
