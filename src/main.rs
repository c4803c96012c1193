use clap::Parser;
use solid_lld::{app, CliConfig};

fn main() {
    let config = CliConfig::parse();
    std::process::exit(app::launch(config));
}
