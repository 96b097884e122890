//! The clickable button bar under the board

use ratatui::layout::Rect;

use crate::game::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Restart,
    Quit,
    ChangeColor(Actor),
}

impl Button {
    pub const ALL: [Button; 4] = [
        Button::Restart,
        Button::Quit,
        Button::ChangeColor(Actor::Snake),
        Button::ChangeColor(Actor::Food),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Button::Restart => "Restart",
            Button::Quit => "Quit",
            Button::ChangeColor(Actor::Snake) => "Snake Color",
            Button::ChangeColor(Actor::Food) => "Food Color",
        }
    }

    /// Label plus a bordered box around it
    fn width(&self) -> u16 {
        self.label().len() as u16 + 4
    }
}

const GAP: u16 = 2;

/// Button positions for one frame, centered in the given row area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonBar {
    slots: Vec<(Button, Rect)>,
}

impl ButtonBar {
    pub fn layout(area: Rect) -> Self {
        let total: u16 = Button::ALL.iter().map(Button::width).sum::<u16>()
            + GAP * (Button::ALL.len() as u16 - 1);
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let right = area.x.saturating_add(area.width);

        let mut slots = Vec::with_capacity(Button::ALL.len());
        for button in Button::ALL {
            let width = button.width().min(right.saturating_sub(x));
            slots.push((button, Rect::new(x, area.y, width, area.height)));
            x = x.saturating_add(button.width() + GAP);
        }

        Self { slots }
    }

    pub fn slots(&self) -> &[(Button, Rect)] {
        &self.slots
    }

    /// Button under the terminal cell (column, row), if any
    pub fn hit(&self, column: u16, row: u16) -> Option<Button> {
        self.slots
            .iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(button, _)| *button)
    }
}
