fn main() -> Result<(), Box<dyn std::error::Error>> {
    chordscope::tui::run()
}
