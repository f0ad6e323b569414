#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub save: bool,
    pub default: bool,
    pub quiet: bool,
    pub strict: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}

