use std::process::ExitCode;

use glbi_exercises::td01;

fn main() -> ExitCode {
    glbi_exercises::launch(td01::ex06::config(), || Ok(td01::ex06::BackgroundColor::new()))
}
