use rand::{seq::SliceRandom, Rng};

use crate::cell::Cell;
use crate::snake::Snake;

/// A point in screen space.
pub type Pixel = (i32, i32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn contains(&self, (px, py): Pixel) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// Screen rectangle covered by `cell` when the grid's top-left corner sits at `origin`.
pub fn cell_rect(cell: Cell, cell_size: i32, origin: Pixel) -> Rect {
    Rect::new(origin.0 + cell.x * cell_size, origin.1 + cell.y * cell_size, cell_size, cell_size)
}

#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
    origin: Pixel,
    screen_width: i32,
}

impl Grid {
    /// A grid horizontally centred on a screen `screen_width` wide, with its top edge at `top`.
    pub fn new(width: i32, height: i32, cell_size: i32, top: i32, screen_width: i32) -> Self {
        let mut grid = Grid {
            width: width.max(1),
            height: height.max(1),
            cell_size: cell_size.max(1),
            origin: (0, top),
            screen_width,
        };
        grid.center();
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn origin(&self) -> Pixel {
        self.origin
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width.max(1);
        self.center();
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height.max(1);
        self.center();
    }

    pub fn set_cell_size(&mut self, cell_size: i32) {
        self.cell_size = cell_size.max(1);
        self.center();
    }

    fn center(&mut self) {
        self.origin.0 = self.screen_width / 2 - self.width * self.cell_size / 2;
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// First row food may spawn on. Row 0 is kept clear unless it is the only row.
    fn first_food_row(&self) -> i32 {
        if self.height > 1 { 1 } else { 0 }
    }

    /// Uniform position with `x` in `[0, width)` and `y` in `[1, height)`.
    pub fn random_food_position<R: Rng>(&self, rng: &mut R) -> Cell {
        let x = rng.gen_range(0..self.width);
        let y = rng.gen_range(self.first_food_row()..self.height);
        Cell::new(x, y)
    }

    /// Like `random_food_position`, but only among cells the snake does not occupy.
    pub fn free_food_position<R: Rng>(&self, rng: &mut R, snake: &Snake) -> Option<Cell> {
        let choices: Vec<Cell> = (self.first_food_row()..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Cell::new(x, y)))
            .filter(|pos| !snake.contains(pos))
            .collect();

        choices.choose(rng).copied()
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        cell_rect(cell, self.cell_size, self.origin)
    }

    pub fn border_rect(&self) -> Rect {
        Rect::new(
            self.origin.0,
            self.origin.1,
            self.width * self.cell_size,
            self.height * self.cell_size,
        )
    }

    /// Line segments of the cell grid: `height + 1` horizontal then `width + 1` vertical.
    pub fn grid_lines(&self) -> Vec<(Pixel, Pixel)> {
        let to_screen = |x: i32, y: i32| {
            (self.origin.0 + x * self.cell_size, self.origin.1 + y * self.cell_size)
        };

        let horizontal = (0..=self.height).map(|y| (to_screen(0, y), to_screen(self.width, y)));
        let vertical = (0..=self.width).map(|x| (to_screen(x, 0), to_screen(x, self.height)));
        horizontal.chain(vertical).collect()
    }
}
