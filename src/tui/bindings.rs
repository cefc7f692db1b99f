use ratatui::crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Up,
    Down,
    UpFast,
    DownFast,
    Home,
    End,
    Goto,
    Random,
    Confirm,
    Cancel,
}

#[derive(Clone, Copy)]
pub struct Binding {
    pub key: KeyCode,
    pub action: Action,
    pub hint: &'static str,
}

pub fn normal_bindings() -> &'static [Binding] {
    &[
        Binding { key: KeyCode::Char('q'), action: Action::Quit, hint: "quit" },
        Binding { key: KeyCode::Esc, action: Action::Quit, hint: "quit" },
        Binding { key: KeyCode::Char('j'), action: Action::Down, hint: "next root" },
        Binding { key: KeyCode::Down, action: Action::Down, hint: "next root" },
        Binding { key: KeyCode::Char('k'), action: Action::Up, hint: "prev root" },
        Binding { key: KeyCode::Up, action: Action::Up, hint: "prev root" },
        Binding { key: KeyCode::Char('J'), action: Action::DownFast, hint: "down x4" },
        Binding { key: KeyCode::Char('K'), action: Action::UpFast, hint: "up x4" },
        Binding { key: KeyCode::Char('['), action: Action::Home, hint: "first root" },
        Binding { key: KeyCode::Char(']'), action: Action::End, hint: "last root" },
        Binding { key: KeyCode::Char('g'), action: Action::Goto, hint: "go to root" },
        Binding { key: KeyCode::Char('/'), action: Action::Goto, hint: "go to root" },
        Binding { key: KeyCode::Char('r'), action: Action::Random, hint: "random root" },
    ]
}

pub fn goto_bindings() -> &'static [Binding] {
    &[
        Binding { key: KeyCode::Enter, action: Action::Confirm, hint: "jump" },
        Binding { key: KeyCode::Esc, action: Action::Cancel, hint: "cancel" },
    ]
}

pub fn lookup(bindings: &[Binding], key: KeyCode) -> Option<Action> {
    bindings.iter().find(|b| b.key == key).map(|b| b.action)
}

pub fn hints(bindings: &[Binding]) -> Vec<(&'static str, &'static str)> {
    let mut seen = std::collections::HashSet::new();
    bindings
        .iter()
        .filter(|b| seen.insert(b.action))
        .map(|b| (key_str(b.key), b.hint))
        .collect()
}

pub fn key_str(key: KeyCode) -> &'static str {
    match key {
        KeyCode::Char('j') => "j",
        KeyCode::Char('k') => "k",
        KeyCode::Char('J') => "J",
        KeyCode::Char('K') => "K",
        KeyCode::Char('q') => "q",
        KeyCode::Char('g') => "g",
        KeyCode::Char('r') => "r",
        KeyCode::Char('/') => "/",
        KeyCode::Char('[') => "[",
        KeyCode::Char(']') => "]",
        KeyCode::Char(' ') => "space",
        KeyCode::Enter => "ret",
        KeyCode::Esc => "esc",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        _ => "?",
    }
}
