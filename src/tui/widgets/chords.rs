use super::util::set_str;
use crate::chord::Chord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

const NAME_COL: u16 = 21;

/// Two-column chord table: quality label, then the spelled-out notes.
/// Row order is the chord set's order; the widget never re-sorts.
pub struct ChordTableWidget<'a> {
    chords: &'a [Chord],
}

impl<'a> ChordTableWidget<'a> {
    pub fn new(chords: &'a [Chord]) -> Self {
        Self { chords }
    }
}

impl Widget for ChordTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < NAME_COL + 4 || area.height < 2 {
            return;
        }

        let header_style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD);
        let name_style = Style::default().fg(Color::Cyan);
        let notes_style = Style::default().fg(Color::White);

        set_str(buf, area.x, area.y, "Chord Type", header_style);
        set_str(buf, area.x + NAME_COL, area.y, "Notes", header_style);

        for (i, chord) in self.chords.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            set_str(buf, area.x, y, chord.quality().name(), name_style);
            set_str(buf, area.x + NAME_COL, y, &chord.to_string(), notes_style);
        }
    }
}
