//! rActivityLog main entrypoint.

use ractivitylog::run;
use ractivitylog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
