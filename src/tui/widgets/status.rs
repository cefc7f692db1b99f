use super::util::set_str;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

pub struct StatusWidget<'a> {
    root: &'a str,
    mode: &'a str,
    message: Option<&'a str>,
}

impl<'a> StatusWidget<'a> {
    pub fn new(root: &'a str, mode: &'a str) -> Self {
        Self {
            root,
            mode,
            message: None,
        }
    }

    pub fn message(mut self, msg: &'a str) -> Self {
        self.message = Some(msg);
        self
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let root_style = Style::default().fg(Color::DarkGray);
        let msg_style = Style::default().fg(Color::White);

        set_str(buf, area.x, area.y, &format!("[{}]", self.mode), mode_style);
        set_str(
            buf,
            area.x + self.mode.len() as u16 + 3,
            area.y,
            &format!("root: {}", self.root),
            root_style,
        );

        if let Some(msg) = self.message {
            let len = msg.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(len + 1);
            set_str(buf, x, area.y, msg, msg_style);
        }
    }
}
