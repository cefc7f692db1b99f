use super::util::set_str;
use crate::key::KeyCenter;
use crate::scale::Scale;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

const DEGREE_COL: u16 = 9;

/// The three scales of the current key, each as a degree-numbered row of
/// pitch-classes: major, natural minor, and the relative minor with its
/// derived root in the label.
pub struct ScalesWidget<'a> {
    key: &'a KeyCenter,
}

impl<'a> ScalesWidget<'a> {
    pub fn new(key: &'a KeyCenter) -> Self {
        Self { key }
    }

    fn render_scale(&self, label: &str, scale: &Scale, area: Rect, y: u16, buf: &mut Buffer) {
        let label_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let degree_style = Style::default().fg(Color::DarkGray);
        let note_style = Style::default().fg(Color::White);

        if y + 2 >= area.y + area.height {
            return;
        }

        set_str(buf, area.x, y, label, label_style);
        for (i, note) in scale.notes().iter().enumerate() {
            let x = area.x + i as u16 * DEGREE_COL;
            if x + DEGREE_COL > area.x + area.width {
                break;
            }
            set_str(buf, x, y + 1, &format!("{}", i + 1), degree_style);
            set_str(buf, x, y + 2, note.name(), note_style);
        }
    }
}

impl Widget for ScalesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < DEGREE_COL || area.height < 3 {
            return;
        }

        let rel_label = format!(
            "Relative Minor ({})",
            self.key.relative_minor_root().name()
        );

        self.render_scale("Major", self.key.major_scale(), area, area.y, buf);
        self.render_scale(
            "Natural Minor",
            self.key.natural_minor_scale(),
            area,
            area.y + 4,
            buf,
        );
        self.render_scale(
            &rel_label,
            self.key.relative_minor_scale(),
            area,
            area.y + 8,
            buf,
        );
    }
}
