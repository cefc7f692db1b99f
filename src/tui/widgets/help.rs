use super::util::set_str;
use crate::tui::bindings::{self, Binding};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

pub struct HelpWidget<'a> {
    bindings: &'a [Binding],
}

impl<'a> HelpWidget<'a> {
    pub fn new(bindings: &'a [Binding]) -> Self {
        Self { bindings }
    }
}

impl Widget for HelpWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default().fg(Color::Cyan);
        let desc_style = Style::default().fg(Color::DarkGray);

        for (i, (key, hint)) in bindings::hints(self.bindings).iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            let y = area.y + i as u16;
            set_str(buf, area.x, y, key, key_style);
            set_str(buf, area.x + 6, y, hint, desc_style);
        }
    }
}
