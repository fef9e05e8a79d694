use clap::error::ErrorKind;
use clap::Parser;

use mood_wall::cli::args::{UpdateArgs, USAGE};
use mood_wall::cli::update;
use mood_wall::error::MoodWallError;
use mood_wall::logging;

fn main() {
    let args = match UpdateArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("[update-mood] fatal: {}", e);
            std::process::exit(1);
        }
    };

    logging::init(args.verbose, "warn");

    match update::run(args) {
        Ok(()) => {}
        Err(MoodWallError::MissingMood) => {
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("[update-mood] fatal: {}", e);
            std::process::exit(1);
        }
    }
}
