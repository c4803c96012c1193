use clap::Parser;
use solid_lld::{app, Principle, PrincipleArgs};

fn main() {
    let args = PrincipleArgs::parse();
    std::process::exit(app::launch(args.into_cli_config(Principle::Dip)));
}
