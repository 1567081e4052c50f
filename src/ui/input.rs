use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.toggle_theme();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Ask => handle_ask_key(app, key),
        Focus::Summarize => handle_summarize_key(app, key),
        Focus::Chat => handle_chat_key(app, key),
    }
}

fn handle_ask_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.reset_ask();
        return;
    }
    match key.code {
        KeyCode::Enter => app.trigger_ask(),
        KeyCode::Backspace => {
            let question = app.ask().input().popped();
            app.edit_question(question);
        }
        KeyCode::Char(ch) if is_plain_char(key) => {
            let question = app.ask().input().pushed(ch);
            app.edit_question(question);
        }
        _ => {}
    }
}

fn handle_summarize_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.reset_summarize();
        return;
    }
    match key.code {
        KeyCode::Enter => app.submit_path(),
        KeyCode::Backspace => app.pop_path_char(),
        KeyCode::Char(ch) if is_plain_char(key) => app.push_path_char(ch),
        _ => {}
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.send_chat(),
        KeyCode::Backspace => {
            let mut draft = app.chat().draft().to_string();
            draft.pop();
            app.edit_chat_draft(draft);
        }
        KeyCode::Char(ch) if is_plain_char(key) => {
            let mut draft = app.chat().draft().to_string();
            draft.push(ch);
            app.edit_chat_draft(draft);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

/// Printable input: no Ctrl or Alt held.
fn is_plain_char(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
