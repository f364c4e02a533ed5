mod args;
mod server;

use crate::args::Arguments;
use log::error;

pub fn init_log(verbosity: usize) -> Result<(), String> {
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity + 2)
        .init()
        .map_err(|e| format!("Unable to initialize logging: {}", e))
}

fn main() {
    let args = Arguments::parse_args();
    if let Err(err) = init_log(args.verbosity) {
        eprintln!("{}", err);
        std::process::exit(1);
    }

    if let Err(err) = server::main(args) {
        error!("DHCPv6 server failed: {}", err);
        std::process::exit(1);
    }
}
