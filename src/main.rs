//! tutorlog main entrypoint.

use tutorlog::run;

fn main() {
    if let Err(e) = run() {
        tutorlog::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
