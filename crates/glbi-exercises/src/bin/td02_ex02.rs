use std::process::ExitCode;

use glbi_exercises::td02;

fn main() -> ExitCode {
    glbi_exercises::launch(td02::ex02::config(), td02::ex02::LineToggle::new)
}
