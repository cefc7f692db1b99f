use super::bindings::{Action, lookup};
use super::config::Bindings;
use super::widgets::{
    ChordTableWidget, HelpWidget, RootListWidget, ScalesWidget, StatusWidget, set_str,
};
use crate::key::KeyCenter;
use crate::note::PitchClass;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
};
use std::{io, time::Duration};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Normal,
    Goto,
}

struct App {
    key: KeyCenter,
    selected: usize,
    mode: Mode,
    bindings: Bindings,
    message: Option<String>,
    should_quit: bool,
    goto_input: Input,
}

impl App {
    fn new(initial: PitchClass, bindings: Bindings) -> Self {
        Self {
            key: KeyCenter::new(initial),
            selected: initial.index() as usize,
            mode: Mode::Normal,
            bindings,
            message: None,
            should_quit: false,
            goto_input: Input::default(),
        }
    }

    /// The single recompute point: every selection change funnels through
    /// here, so the key snapshot is rebuilt exactly once per change.
    fn select(&mut self, index: usize) {
        self.selected = index;
        self.key.set_root(PitchClass::all()[index]);
    }

    fn move_selection(&mut self, delta: i32) {
        // The domain is cyclic, so the selector wraps instead of clamping.
        let index = (self.selected as i32 + delta).rem_euclid(12) as usize;
        self.select(index);
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.message = None;

        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Goto => self.handle_goto_key(code, modifiers),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        let Some(action) = lookup(&self.bindings.normal, code) else {
            return;
        };
        match action {
            Action::Quit => self.should_quit = true,
            Action::Down => self.move_selection(1),
            Action::Up => self.move_selection(-1),
            Action::DownFast => self.move_selection(4),
            Action::UpFast => self.move_selection(-4),
            Action::Home => self.select(0),
            Action::End => self.select(PitchClass::all().len() - 1),
            Action::Goto => {
                self.goto_input.reset();
                self.mode = Mode::Goto;
            }
            Action::Random => {
                self.select(fastrand::usize(..PitchClass::all().len()));
                self.message = Some(format!("Jumped to {}", self.key.root()));
            }
            _ => {}
        }
    }

    fn handle_goto_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if let Some(action) = lookup(&self.bindings.goto, code) {
            match action {
                Action::Cancel => {
                    self.mode = Mode::Normal;
                }
                Action::Confirm => {
                    match PitchClass::parse(self.goto_input.value()) {
                        Ok(pc) => self.select(pc.index() as usize),
                        Err(e) => self.message = Some(e.to_string()),
                    }
                    self.mode = Mode::Normal;
                }
                _ => {}
            }
            return;
        }
        self.goto_input
            .handle_event(&Event::Key(KeyEvent::new(code, modifiers)));
    }

    fn ui(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(18),
                Constraint::Min(0),
                Constraint::Length(18),
            ])
            .split(chunks[0]);

        let roots_area = main_chunks[0];
        let center_area = main_chunks[1];
        let help_area = main_chunks[2];
        let status_area = chunks[1];

        let roots_block = Block::default().title(" Roots ").borders(Borders::ALL);
        f.render_widget(roots_block, roots_area);
        let roots_inner = Rect::new(
            roots_area.x + 2,
            roots_area.y + 1,
            roots_area.width.saturating_sub(3),
            roots_area.height.saturating_sub(2),
        );
        f.render_widget(
            RootListWidget::new(self.selected, self.key.relative_minor_root()),
            roots_inner,
        );

        let center_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(11), Constraint::Min(0)])
            .split(center_area);

        let chords_block = Block::default()
            .title(format!(" Chords for {} ", self.key.root()))
            .borders(Borders::ALL);
        f.render_widget(chords_block, center_chunks[0]);
        let chords_inner = Rect::new(
            center_chunks[0].x + 2,
            center_chunks[0].y + 1,
            center_chunks[0].width.saturating_sub(3),
            center_chunks[0].height.saturating_sub(2),
        );
        f.render_widget(ChordTableWidget::new(self.key.chords()), chords_inner);

        let scales_block = Block::default().title(" Scales ").borders(Borders::ALL);
        f.render_widget(scales_block, center_chunks[1]);
        let scales_inner = Rect::new(
            center_chunks[1].x + 2,
            center_chunks[1].y + 1,
            center_chunks[1].width.saturating_sub(3),
            center_chunks[1].height.saturating_sub(2),
        );
        f.render_widget(ScalesWidget::new(&self.key), scales_inner);

        let help_block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::Rgb(60, 60, 60)));
        f.render_widget(help_block, help_area);
        let help_inner = Rect::new(
            help_area.x + 2,
            help_area.y + 1,
            help_area.width.saturating_sub(3),
            help_area.height.saturating_sub(1),
        );
        let help_bindings = match self.mode {
            Mode::Normal => &self.bindings.normal,
            Mode::Goto => &self.bindings.goto,
        };
        f.render_widget(HelpWidget::new(help_bindings), help_inner);

        let mode_str = match self.mode {
            Mode::Normal => "NORMAL",
            Mode::Goto => "GOTO",
        };
        let root_label = self.key.root().name();
        let mut status = StatusWidget::new(root_label, mode_str);
        if let Some(ref msg) = self.message {
            status = status.message(msg);
        }
        f.render_widget(status, status_area);

        if self.mode == Mode::Goto {
            let prompt_width = 40u16.min(f.area().width.saturating_sub(4));
            let prompt_height = 3u16;
            let prompt_x = (f.area().width.saturating_sub(prompt_width)) / 2;
            let prompt_y = (f.area().height.saturating_sub(prompt_height)) / 2;
            let prompt_area = Rect::new(prompt_x, prompt_y, prompt_width, prompt_height);

            f.render_widget(Clear, prompt_area);

            let prompt_block = Block::default()
                .title(" Go To Root (Enter confirm, Esc cancel) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow));
            f.render_widget(prompt_block, prompt_area);

            set_str(
                f.buffer_mut(),
                prompt_area.x + 2,
                prompt_area.y + 1,
                self.goto_input.value(),
                Style::default().fg(Color::White),
            );
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let initial = match std::env::args().nth(1) {
        Some(arg) => PitchClass::parse(&arg)?,
        None => PitchClass::C,
    };

    let bindings = Bindings::load();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(initial, bindings);

    loop {
        terminal.draw(|f| app.ui(f))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code, key.modifiers);
            }
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
