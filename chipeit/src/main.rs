use std::path::PathBuf;
use std::process;

use tracing::error;

mod keymap;
mod run;

fn main() {
    tracing_subscriber::fmt::init();

    let rom: PathBuf = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            error!("usage: chipeit <rom>");
            process::exit(2);
        }
    };

    if let Err(e) = run::run(rom) {
        error!("{e}");
        process::exit(1);
    }
}
