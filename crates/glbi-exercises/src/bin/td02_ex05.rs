use std::process::ExitCode;

use glbi_exercises::td02;

fn main() -> ExitCode {
    glbi_exercises::launch(td02::ex05::config(), || Ok(td02::ex05::CatHead::new()))
}
