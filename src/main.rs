use std::env;

mod cli;
mod exits;
mod pass;
mod rand;
mod settings;
mod strength;
mod terminal;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    let code = cli::run(args);
    std::process::exit(code);
}
