use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::cell::Direction::{self, *};
use crate::grid::Pixel;

/// A player action decoded from a terminal event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Steer(Direction),
    Confirm,
    /// Left click at terminal (column, row).
    Click(Pixel),
}

impl Input {
    pub fn from_event(ev: &Event) -> Option<Input> {
        match ev {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::from_key_event(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(Input::Click((*column as i32, *row as i32))),
            _ => None,
        }
    }

    pub fn from_key_event(ev: &KeyEvent) -> Option<Input> {
        if is_ctrl_c(ev) {
            return Some(Input::Quit);
        }

        match ev.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Input::Quit),
            KeyCode::Char('w') | KeyCode::Up => Some(Input::Steer(Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Input::Steer(Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Input::Steer(Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Input::Steer(Right)),
            KeyCode::Enter => Some(Input::Confirm),
            _ => None,
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL, .. })
}
