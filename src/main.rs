use std::{io, process};

use shinkansen_analytics::cli;

fn main() {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = cli::run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock());
    process::exit(code);
}
