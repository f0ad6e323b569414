mod context;
mod flags;
mod help;
mod parse;
mod prompts;
mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{MAX_PASSWORDS, ParseError, parse};

/// Run the CLI and return the process exit status.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::usage_hint();
            return 1;
        }
    };

    match ctx.run() {
        Ok(()) => 0,
        Err(Done(code)) => code,
    }
}
