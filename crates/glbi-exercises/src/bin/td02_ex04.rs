use std::process::ExitCode;

use glbi_exercises::td02;

fn main() -> ExitCode {
    glbi_exercises::launch(td02::ex04::config(), td02::ex04::ShapeCycle::new)
}
