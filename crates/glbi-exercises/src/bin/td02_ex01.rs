use std::process::ExitCode;

use glbi_exercises::td02;

fn main() -> ExitCode {
    glbi_exercises::launch(td02::ex01::config(), td02::ex01::FourPoints::new)
}
