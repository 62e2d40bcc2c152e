use crate::config::{GameConfig, SettingKind};
use crate::grid::{Pixel, Rect};

const BUTTON_WIDTH: i32 = 3;
const PADDING: i32 = 1;

/// A `[-] LABEL: value [+]` control bounded to an inclusive range.
#[derive(Clone, Debug)]
pub struct NumberInput {
    label: &'static str,
    value: i32,
    min: i32,
    max: i32,
    rect: Rect,
    button_minus: Rect,
    button_plus: Rect,
}

impl NumberInput {
    /// Lays the buttons out inside `rect`: minus on the left, plus on the right.
    pub fn new(rect: Rect, label: &'static str, value: i32, (min, max): (i32, i32)) -> Self {
        let inner = Rect::new(
            rect.x + BUTTON_WIDTH + PADDING,
            rect.y,
            rect.w - BUTTON_WIDTH * 2 - PADDING * 2,
            rect.h,
        );
        NumberInput {
            label,
            value,
            min,
            max,
            rect: inner,
            button_minus: Rect::new(inner.x - BUTTON_WIDTH - PADDING, rect.y, BUTTON_WIDTH, rect.h),
            button_plus: Rect::new(inner.x + inner.w + PADDING, rect.y, BUTTON_WIDTH, rect.h),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }

    pub fn value_rect(&self) -> Rect {
        self.rect
    }

    pub fn minus_rect(&self) -> Rect {
        self.button_minus
    }

    pub fn plus_rect(&self) -> Rect {
        self.button_plus
    }

    /// Returns the new value when the click hits a button and the result stays in range.
    pub fn handle_click(&mut self, pos: Pixel) -> Option<i32> {
        let new_value = if self.button_minus.contains(pos) {
            self.value - 1
        } else if self.button_plus.contains(pos) {
            self.value + 1
        } else {
            return None;
        };

        if !(self.min..=self.max).contains(&new_value) {
            return None;
        }

        self.value = new_value;
        Some(new_value)
    }
}

/// The stacked speed / width / height / cell-size inputs.
#[derive(Clone, Debug)]
pub struct SettingsPanel {
    inputs: Vec<(SettingKind, NumberInput)>,
}

impl SettingsPanel {
    /// One row per setting starting at `top`, each `width` columns wide and centred on `center_x`.
    pub fn new(config: &GameConfig, center_x: i32, top: i32, width: i32) -> Self {
        let inputs = SettingKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                let rect = Rect::new(center_x - width / 2, top + i as i32, width, 1);
                (kind, NumberInput::new(rect, kind.label(), config.get(kind), kind.bounds()))
            })
            .collect();

        SettingsPanel { inputs }
    }

    pub fn inputs(&self) -> impl Iterator<Item = &NumberInput> {
        self.inputs.iter().map(|(_, input)| input)
    }

    pub fn value(&self, kind: SettingKind) -> Option<i32> {
        self.inputs.iter().find(|(k, _)| *k == kind).map(|(_, input)| input.value())
    }

    /// Routes a click to every input and collects the changes it produced.
    pub fn handle_click(&mut self, pos: Pixel) -> Vec<(SettingKind, i32)> {
        self.inputs
            .iter_mut()
            .filter_map(|(kind, input)| input.handle_click(pos).map(|v| (*kind, v)))
            .collect()
    }
}
