use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use whip_core::{Key, Msg};

/// Maps a terminal key event to the state machine's input vocabulary.
///
/// Ctrl+C arrives as a plain key event in raw mode and behaves exactly
/// like Esc: interrupt from any phase.
pub fn map_key(event: KeyEvent) -> Msg {
    if event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Msg::Key(Key::Interrupt);
    }
    let key = match event.code {
        KeyCode::Esc => Key::Interrupt,
        KeyCode::Enter => Key::Enter,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    Msg::Key(key)
}
