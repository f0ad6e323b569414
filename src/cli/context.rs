//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, MAX_PASSWORDS, ParseError, help, prompts, quiet};
use crate::pass::{self, GenerationPolicy, PolicyError};
use crate::rand::{self, RandomError, RandomSource, SecureRandomSource};
use crate::settings::Settings;
use crate::strength;
use crate::terminal::{self, Report};

/// Early exit carrying the process status. Not an error in itself.
#[derive(Debug, PartialEq, Eq)]
pub struct Done(pub i32);

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Box<dyn ClipboardProvider>>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: Vec<String>) -> Result<Self, ParseError> {
        let flags = super::parse(&args)?;
        quiet::set(flags.quiet);

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        Ok(Self::with_settings(flags, settings))
    }

    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        Self {
            settings,
            clipboard: None,
            flags,
        }
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.apply_flags()?;
        self.handle_save()?;
        let mut rng = self.select_source(SecureRandomSource::new())?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.generate_output(&mut rng, &mut out)
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            help::print_help();
            return Err(Done(0));
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Done(0));
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    pub fn apply_flags(&mut self) -> Result<(), Done> {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        if self.flags.no_upper {
            self.settings.include_uppercase = false;
        }
        if self.flags.no_lower {
            self.settings.include_lowercase = false;
        }
        if self.flags.no_digits {
            self.settings.include_numbers = false;
        }
        if self.flags.no_symbols {
            self.settings.include_symbols = false;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(Box::new(c));
                    self.settings.to_clipboard = true;
                }
                Err(e) => {
                    log::debug!("clipboard unavailable: {e}");
                    self.without_clipboard(prompts::clipboard_fallback_prompt())?;
                }
            }
        }

        log::debug!("resolved policy {:?}", self.settings.policy());
        Ok(())
    }

    /// Route output to the terminal, or abort when the user declined that.
    fn without_clipboard(&mut self, print_instead: bool) -> Result<(), Done> {
        if !print_instead {
            return Err(Done(1));
        }
        self.clipboard = None;
        self.settings.to_clipboard = false;
        Ok(())
    }

    fn handle_save(&self) -> Result<(), Done> {
        if !self.flags.save {
            return Ok(());
        }
        // Never persist a policy the generator would reject.
        if let Err(e) = self.settings.policy().validate() {
            return Err(refuse(e));
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::defaults_saved(&Settings::saved_path()),
            Err(e) => prompts::warn(&format!("Failed to save defaults: {}", e)),
        }
        Ok(())
    }

    /// Turn the outcome of opening the OS generator into the source for this run.
    pub fn select_source(
        &self,
        os: Result<SecureRandomSource, RandomError>,
    ) -> Result<Box<dyn RandomSource>, Done> {
        if self.flags.strict {
            return rand::select_secure(os).map_err(|e| {
                log::error!("{e}");
                prompts::error(&e.to_string());
                Done(1)
            });
        }
        let rng = rand::select(os);
        if !rng.is_secure() {
            prompts::fallback_source(rng.name());
        }
        Ok(rng)
    }

    /// Generate passwords and route them to the clipboard or `out`.
    pub fn generate_output<R, W>(&mut self, rng: &mut R, out: &mut W) -> Result<(), Done>
    where
        R: RandomSource + ?Sized,
        W: Write,
    {
        let policy = self.settings.policy();
        let count = self.settings.number_of_passwords;
        if !(1..=MAX_PASSWORDS).contains(&count) {
            prompts::error(&ParseError::CountOutOfRange(count).to_string());
            return Err(Done(1));
        }

        let report = if self.settings.to_clipboard {
            let mut passwords = pass::generate_batch(&policy, rng, count).map_err(refuse)?;
            let report = build_report(&passwords[0], &policy, rng.name(), rng.is_secure());
            let copied = self.copy_to_clipboard(&passwords);
            let written = if copied {
                Ok(())
            } else {
                prompts::warn("Printing to terminal instead.");
                passwords.iter().try_for_each(|p| writeln!(out, "{p}"))
            };
            passwords.iter_mut().for_each(|p| p.zeroize());
            written.map_err(closed)?;
            report
        } else {
            let mut report = None;
            for _ in 0..count {
                let mut password = pass::generate(&policy, rng).map_err(refuse)?;
                if report.is_none() {
                    report = Some(build_report(&password, &policy, rng.name(), rng.is_secure()));
                }
                let written = writeln!(out, "{password}");
                password.zeroize();
                written.map_err(closed)?;
            }
            // count >= 1, so the first iteration set it
            report.ok_or(Done(1))?
        };
        out.flush().map_err(closed)?;

        if !quiet::enabled() && quiet::stdout_is_tty() {
            terminal::print_report(&report);
        }
        Ok(())
    }

    /// Returns false when nothing reached the clipboard.
    fn copy_to_clipboard(&mut self, passwords: &[String]) -> bool {
        let Some(ctx) = self.clipboard.as_mut() else {
            return false;
        };
        let mut contents = passwords.join("\n");
        let copied = match ctx.set_contents(contents.clone()) {
            Ok(_) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied(passwords.len());
                true
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                false
            }
        };
        contents.zeroize();
        copied
    }
}

fn refuse(e: PolicyError) -> Done {
    log::debug!("generation refused: {e:?}");
    prompts::error(&e.to_string());
    Done(1)
}

fn closed(e: std::io::Error) -> Done {
    log::debug!("output closed: {e}");
    Done(1)
}

/// Strength report for `password`. Every password of a batch shares the same
/// score, since scoring reads only the length and the class flags.
pub fn build_report(
    password: &str,
    policy: &GenerationPolicy,
    source: &'static str,
    secure: bool,
) -> Report {
    Report {
        strength: strength::score(password, policy),
        pool_size: policy.pool_size(),
        entropy_bits: strength::entropy_bits(policy.length, policy.pool_size()),
        source,
        secure,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rand::test_support::Sequence;
    use crate::strength::Label;

    type ClipResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

    /// Clipboard that keeps what it was given, or refuses everything.
    struct FakeClipboard {
        contents: std::sync::Arc<std::sync::Mutex<String>>,
        fail: bool,
    }

    impl ClipboardProvider for FakeClipboard {
        fn get_contents(&mut self) -> ClipResult<String> {
            Ok(self.contents.lock().map(|c| c.clone()).unwrap_or_default())
        }

        fn set_contents(&mut self, data: String) -> ClipResult<()> {
            if self.fail {
                return Err("no display".into());
            }
            if let Ok(mut c) = self.contents.lock() {
                *c = data;
            }
            Ok(())
        }
    }

    fn context(flags: CliFlags) -> Context {
        let mut ctx = Context::with_settings(flags, Settings::default());
        assert_eq!(ctx.apply_flags(), Ok(()));
        ctx
    }

    fn with_clipboard(fail: bool) -> (Context, std::sync::Arc<std::sync::Mutex<String>>) {
        let mut ctx = context(CliFlags {
            length: Some(4),
            number: Some(2),
            quiet: true,
            ..Default::default()
        });
        let contents = std::sync::Arc::new(std::sync::Mutex::new(String::new()));
        ctx.clipboard = Some(Box::new(FakeClipboard {
            contents: contents.clone(),
            fail,
        }));
        ctx.settings.to_clipboard = true;
        (ctx, contents)
    }

    fn unavailable() -> Result<SecureRandomSource, RandomError> {
        Err(RandomError::SecureSourceUnavailable("getrandom failed".into()))
    }

    #[test]
    fn flags_override_settings() {
        let ctx = context(CliFlags {
            length: Some(8),
            number: Some(4),
            no_upper: true,
            no_symbols: true,
            ..Default::default()
        });
        let policy = ctx.settings.policy();
        assert_eq!(policy.length, 8);
        assert!(!policy.include_uppercase && !policy.include_symbols);
        assert!(policy.include_lowercase && policy.include_numbers);
        assert_eq!(ctx.settings.number_of_passwords, 4);
    }

    #[test]
    fn quiet_is_set_while_parsing() -> anyhow::Result<()> {
        let args = ["passforge", "-q", "-d"].map(String::from).to_vec();
        let ctx = Context::new(args)?;
        assert!(ctx.flags.quiet);
        assert!(quiet::enabled());
        Ok(())
    }

    #[test]
    fn declined_clipboard_fallback_exits_with_failure() {
        let mut ctx = context(CliFlags::default());
        ctx.settings.to_clipboard = true;
        assert_eq!(ctx.without_clipboard(false), Err(Done(1)));
        assert_eq!(ctx.without_clipboard(true), Ok(()));
        assert!(!ctx.settings.to_clipboard);
    }

    #[test]
    fn invalid_policy_exits_with_failure() {
        let mut ctx = context(CliFlags {
            no_upper: true,
            no_lower: true,
            no_digits: true,
            no_symbols: true,
            quiet: true,
            ..Default::default()
        });
        let mut rng = Sequence::new(&[0]);
        let mut out = Vec::new();
        assert_eq!(ctx.generate_output(&mut rng, &mut out), Err(Done(1)));

        let mut ctx = context(CliFlags {
            length: Some(129),
            quiet: true,
            ..Default::default()
        });
        assert_eq!(ctx.generate_output(&mut rng, &mut out), Err(Done(1)));
        assert!(out.is_empty());
    }

    #[test]
    fn valid_policy_generates() {
        let mut ctx = context(CliFlags {
            length: Some(1),
            quiet: true,
            ..Default::default()
        });
        let mut rng = Sequence::new(&[0]);
        let mut out = Vec::new();
        assert_eq!(ctx.generate_output(&mut rng, &mut out), Ok(()));
        assert_eq!(out, b"A\n");
    }

    #[test]
    fn prints_one_line_per_password() {
        let mut ctx = context(CliFlags {
            length: Some(3),
            number: Some(3),
            no_lower: true,
            no_digits: true,
            no_symbols: true,
            quiet: true,
            ..Default::default()
        });
        let mut rng = Sequence::new(&[0, 1, 2]);
        let mut out = Vec::new();
        assert_eq!(ctx.generate_output(&mut rng, &mut out), Ok(()));
        assert_eq!(String::from_utf8_lossy(&out), "ABC\nABC\nABC\n");
    }

    #[test]
    fn count_outside_range_is_refused() {
        let mut rng = Sequence::new(&[0]);
        for number in [0, MAX_PASSWORDS + 1] {
            let mut ctx = context(CliFlags {
                number: Some(number),
                quiet: true,
                ..Default::default()
            });
            let mut out = Vec::new();
            assert_eq!(ctx.generate_output(&mut rng, &mut out), Err(Done(1)));
            assert!(out.is_empty());
        }
    }

    #[test]
    fn clipboard_receives_batch() {
        let (mut ctx, contents) = with_clipboard(false);
        let mut rng = Sequence::new(&[25]);
        let mut out = Vec::new();
        assert_eq!(ctx.generate_output(&mut rng, &mut out), Ok(()));
        assert!(out.is_empty());
        assert_eq!(*contents.lock().expect("clipboard lock"), "ZZZZ\nZZZZ");
    }

    #[test]
    fn clipboard_failure_prints_instead() {
        let (mut ctx, contents) = with_clipboard(true);
        let mut rng = Sequence::new(&[25]);
        let mut out = Vec::new();
        assert_eq!(ctx.generate_output(&mut rng, &mut out), Ok(()));
        assert_eq!(String::from_utf8_lossy(&out), "ZZZZ\nZZZZ\n");
        assert!(contents.lock().expect("clipboard lock").is_empty());
    }

    #[test]
    fn strict_refuses_fallback_source() {
        let ctx = context(CliFlags {
            strict: true,
            quiet: true,
            ..Default::default()
        });
        assert!(matches!(ctx.select_source(unavailable()), Err(Done(1))));
        let rng = ctx.select_source(SecureRandomSource::new());
        assert!(rng.is_ok_and(|r| r.is_secure()));
    }

    #[test]
    fn fallback_source_when_not_strict() {
        let ctx = context(CliFlags {
            quiet: true,
            ..Default::default()
        });
        let rng = ctx.select_source(unavailable()).expect("fallback source");
        assert!(!rng.is_secure());
    }

    #[test]
    fn report_for_default_policy() {
        let policy = Settings::default().policy();
        let report = build_report("Aa0!Aa0!Aa0!Aa0!", &policy, "os", true);
        assert_eq!(report.strength.score, 10);
        assert_eq!(report.strength.label, Label::Strong);
        assert_eq!(report.pool_size, 88);
        assert!(report.entropy_bits > 103.0 && report.entropy_bits < 103.4);
    }
}
