use super::CliFlags;

/// Upper bound for `-n`. Clipboard output holds the whole batch in memory.
pub const MAX_PASSWORDS: usize = 100_000;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Password count {0} is outside 1-{max}", max = MAX_PASSWORDS)]
    CountOutOfRange(usize),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--save" => flags.save = true,
            "-d" | "--default" => flags.default = true,
            "--strict" => flags.strict = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(number_arg(args, i)?);
            }
            "-n" | "--number" => {
                i += 1;
                let count = number_arg(args, i)?;
                if !(1..=MAX_PASSWORDS).contains(&count) {
                    return Err(ParseError::CountOutOfRange(count));
                }
                flags.number = Some(count);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number_arg(args: &[String], i: usize) -> Result<usize, ParseError> {
    let value = args
        .get(i)
        .ok_or_else(|| ParseError::MissingValue(args[i - 1].clone()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}
