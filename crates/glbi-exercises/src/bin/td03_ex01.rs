use std::process::ExitCode;

use glbi_exercises::td03;

fn main() -> ExitCode {
    println!("{}", td03::ex01::INSTRUCTIONS);
    glbi_exercises::launch(td03::ex01::config(), || Ok(td03::ex01::Pile::new()))
}
