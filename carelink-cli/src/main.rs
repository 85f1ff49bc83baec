//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = carelink_cli::run() {
        eprintln!("carelink: {err}");
        std::process::exit(1);
    }
}
