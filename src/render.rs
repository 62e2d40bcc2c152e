use std::io;

use crossterm::style::Color;
use rand::Rng;

use crate::cell::Cell;
use crate::game::Game;
use crate::grid::{Pixel, Rect};
use crate::session::GameState;
use crate::term::TermManager;
use crate::widget::NumberInput;

pub const TITLE: &str = "GRID SNAKE";

const TITLE_ROW: i32 = 0;
const SCORE_ROW: i32 = 1;
pub const PANEL_TOP: i32 = 3;
pub const PANEL_WIDTH: i32 = 24;
const MESSAGE_ROW: i32 = 8;
const GRID_ROW: i32 = 10;
/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_COLS: i32 = 2;

const FILLED_CELL: &str = "██";
const EMPTY_CELL: &str = "· ";

const COLOR_GRID: Color = Color::Rgb { r: 100, g: 100, b: 100 };
const COLOR_SNAKE: Color = Color::Rgb { r: 200, g: 200, b: 250 };
const COLOR_FOOD: Color = Color::Rgb { r: 250, g: 150, b: 150 };
const COLOR_TEXT: Color = Color::Rgb { r: 250, g: 250, b: 250 };
const COLOR_BORDER_PLAYING: Color = Color::Rgb { r: 100, g: 100, b: 200 };
const COLOR_BORDER_DEAD: Color = Color::Rgb { r: 200, g: 70, b: 70 };

/// The grid's border box, horizontally centred on `center_x`.
pub fn grid_frame(center_x: i32, width: i32, height: i32) -> Rect {
    let w = width * CELL_COLS + 2;
    Rect::new(center_x - w / 2, GRID_ROW, w, height + 2)
}

/// Terminal position of the left column of `cell` inside `frame`.
pub fn cell_position(frame: Rect, cell: Cell) -> Pixel {
    (frame.x + 1 + cell.x * CELL_COLS, frame.y + 1 + cell.y)
}

pub fn draw<R: Rng>(term: &mut TermManager, game: &Game<R>) -> io::Result<()> {
    let session = game.session();
    let grid = session.grid();
    let center_x = term.size().0 as i32 / 2;

    term.clear()?;
    term.print_centered(TITLE_ROW, TITLE, COLOR_TEXT)?;
    term.print_centered(SCORE_ROW, &format!("Score: {}", session.score()), COLOR_TEXT)?;

    for input in game.panel().inputs() {
        draw_number_input(term, input)?;
    }

    let border_color = match session.state() {
        GameState::Playing => COLOR_BORDER_PLAYING,
        GameState::Dead if session.has_won() => {
            term.print_centered(MESSAGE_ROW, "YOU WIN! PRESS ENTER TO RESTART", COLOR_TEXT)?;
            COLOR_BORDER_PLAYING
        }
        GameState::Dead => {
            term.print_centered(MESSAGE_ROW, "GAME OVER! PRESS ENTER TO RESTART", COLOR_TEXT)?;
            COLOR_BORDER_DEAD
        }
    };

    let frame = grid_frame(center_x, grid.width(), grid.height());
    term.draw_border(frame, border_color)?;

    let empty_row = EMPTY_CELL.repeat(grid.width() as usize);
    for y in 0..grid.height() {
        let (x, y) = cell_position(frame, Cell::new(0, y));
        term.print_at(x, y, &empty_row, COLOR_GRID)?;
    }

    // A resize while dead can leave cells outside the new grid
    for cell in session.snake().body().filter(|c| grid.contains(c)) {
        let (x, y) = cell_position(frame, *cell);
        term.print_at(x, y, FILLED_CELL, COLOR_SNAKE)?;
    }

    if let Some(food) = session.food().filter(|c| grid.contains(c)) {
        let (x, y) = cell_position(frame, food);
        term.print_at(x, y, FILLED_CELL, COLOR_FOOD)?;
    }

    term.flush()
}

fn draw_number_input(term: &mut TermManager, input: &NumberInput) -> io::Result<()> {
    let minus = input.minus_rect();
    let plus = input.plus_rect();
    let value = input.value_rect();

    term.print_at(minus.x, minus.y, "[-]", COLOR_TEXT)?;
    term.print_at(plus.x, plus.y, "[+]", COLOR_TEXT)?;

    let text = input.text();
    let x = value.x + value.w / 2 - text.chars().count() as i32 / 2;
    term.print_at(x, value.y, &text, COLOR_TEXT)
}
