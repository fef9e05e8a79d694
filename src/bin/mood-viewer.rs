use clap::Parser;

use mood_wall::cli::viewer::{self, ViewerArgs};
use mood_wall::logging;

fn main() {
    let args = ViewerArgs::parse();
    logging::init(args.verbose, "info");

    if let Err(e) = viewer::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
