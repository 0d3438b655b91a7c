//! Command-line arguments.

use std::path::PathBuf;

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Run(Options),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Program text given with `--eval`.
    pub eval: Option<String>,
    /// Enter the REPL after anything else has run.
    pub repl: bool,
    /// Exit on the first unrecovered error.
    pub fatal: bool,
    pub verbose: bool,
    pub file: Option<PathBuf>,
    /// Arguments after the program file, passed through to `args()`.
    pub args: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            eval: None,
            repl: false,
            fatal: true,
            verbose: false,
            file: None,
            args: Vec::new(),
        }
    }
}

impl Options {
    /// With nothing to run, the REPL starts.
    pub fn starts_repl(&self) -> bool {
        self.repl || (self.eval.is_none() && self.file.is_none())
    }

    /// The list `args()` sees: the program file, if any, then its arguments.
    pub fn program_args(&self) -> Vec<String> {
        self.file
            .iter()
            .map(|file| file.display().to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Parse the arguments after the binary name.
///
/// Options come first. The first non-option argument names the program
/// file and everything after it belongs to the program.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" => return Ok(Command::Version),
            "--eval" | "-e" => {
                let Some(source) = iter.next() else {
                    return Err(format!("{arg} needs a program to evaluate"));
                };
                options.eval = Some(source.clone());
            }
            "--repl" | "-r" => options.repl = true,
            "--no-fatal" => options.fatal = false,
            "--verbose" | "-v" => options.verbose = true,
            "--" => {
                if let Some(file) = iter.next() {
                    options.file = Some(PathBuf::from(file));
                }
                break;
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option '{flag}'"));
            }
            file => {
                options.file = Some(PathBuf::from(file));
                break;
            }
        }
    }

    options.args = iter.cloned().collect();
    if options.eval.is_some() && options.file.is_some() {
        return Err("give either a program file or --eval, not both".to_string());
    }
    Ok(Command::Run(options))
}
