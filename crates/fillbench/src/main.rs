//! `fillbench`: prints the mean time to fill one million integers four ways.
//!
//! Takes no arguments and reads no environment. Exit status is `0` on
//! success, `-1` if the raw heap block cannot be allocated, and `1` if
//! a dynamic array's capacity drifts from the requested size.

use std::io;

use log::LevelFilter;

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .init();

    let code = {
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        fillbench::run_default(&mut out, &mut err)
    };
    std::process::exit(code);
}
