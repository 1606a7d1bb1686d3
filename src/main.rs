//! Binary entry point for `pf2tw`.

use std::process;

fn main() {
    if let Err(e) = pf2tw::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
