use super::util::set_str;
use crate::note::PitchClass;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// The 12 chromatic roots as a selectable list. The relative-minor root of
/// the current selection gets a dim tag so the relationship is visible at a
/// glance.
pub struct RootListWidget {
    selected: usize,
    relative_minor: PitchClass,
}

impl RootListWidget {
    pub fn new(selected: usize, relative_minor: PitchClass) -> Self {
        Self {
            selected,
            relative_minor,
        }
    }
}

impl Widget for RootListWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let normal_style = Style::default().fg(Color::Gray);
        let tag_style = Style::default().fg(Color::DarkGray);

        for (i, &pc) in PitchClass::all().iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            let y = area.y + i as u16;
            let style = if i == self.selected {
                selected_style
            } else {
                normal_style
            };
            set_str(buf, area.x, y, &format!("{:<9}", pc.name()), style);
            if pc == self.relative_minor && i != self.selected {
                set_str(buf, area.x + 10, y, "rel", tag_style);
            }
        }
    }
}
