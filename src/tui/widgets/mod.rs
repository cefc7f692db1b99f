mod util;

mod chords;
mod help;
mod roots;
mod scales;
mod status;

pub use util::{set_cell, set_str};

pub use chords::ChordTableWidget;
pub use help::HelpWidget;
pub use roots::RootListWidget;
pub use scales::ScalesWidget;
pub use status::StatusWidget;
