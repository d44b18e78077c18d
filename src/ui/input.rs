//! Input handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use crate::core::GitBackend;

/// Handle a crossterm event.
/// Returns true if the event was handled.
pub fn handle_input<G: GitBackend>(app: &mut App<G>, event: Event) -> bool {
    match event {
        // Terminals with keyboard enhancement also report releases and repeats.
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Resize(_, height) => {
            app.resize(height);
            true
        }
        _ => false,
    }
}

/// Handle a key event.
fn handle_key<G: GitBackend>(app: &mut App<G>, key: KeyEvent) -> bool {
    app.clear_messages();

    // Letter bindings fire only bare or with Shift (`G`); Ctrl/Alt chords stay unbound.
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Char(c) if plain => match c {
            'q' => app.quit(),
            ' ' => app.toggle_selected(),
            'd' => app.toggle_diff_mode(),
            'g' => app.scroll_to_top(),
            'G' => app.scroll_to_bottom(),
            _ => return false,
        },
        _ => return false,
    }
    true
}
