use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{crate_version, Arg, ArgMatches, Command};
use strum::{EnumVariantNames, VariantNames};
use tracing_subscriber::EnvFilter;

use tagcase::zero::ZeroMode;
use tagcase::{config, err, err_str};
use tagcase::{CustomLittleScope, Error, RuleConfig, TitleCorrector, WordList};

#[derive(Debug, Copy, Clone, PartialEq, EnumVariantNames)]
#[strum(serialize_all = "kebab_case")]
pub enum LittleScope {
    Interior,
    Anywhere,
}

impl FromStr for LittleScope {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, &'static str> {
        match s.to_ascii_lowercase().as_ref() {
            "interior" => Ok(LittleScope::Interior),
            "anywhere" => Ok(LittleScope::Anywhere),
            _ => Err("unknown scope"),
        }
    }
}

impl From<LittleScope> for CustomLittleScope {
    fn from(scope: LittleScope) -> Self {
        match scope {
            LittleScope::Interior => CustomLittleScope::Interior,
            LittleScope::Anywhere => CustomLittleScope::Anywhere,
        }
    }
}

fn values_arg() -> Arg<'static> {
    Arg::new("VALUES")
        .help("Values to process. Read line by line from standard input if omitted")
        .multiple_values(true)
        .index(1)
}

/// Main function of the tagcase CLI.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("tagcase")
        .version(crate_version!())
        .about("Correct the case of titles, artists and albums and normalize the zero padding of track, disc, episode and season numbers.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("diff")
                .long("diff")
                .short('d')
                .help("Only print values that changed, as `old => new`")
                .global(true),
        )
        .subcommand(
            Command::new("case")
                .about("Put values into title case")
                .arg(values_arg())
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Read the rules from a YAML preferences file")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("save-config")
                        .long("save-config")
                        .help("Write the effective rules to a YAML preferences file")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("no-little-words")
                        .long("no-little-words")
                        .help("Do not keep little words like `of` or `the` lower case"),
                )
                .arg(
                    Arg::new("no-force-caps")
                        .long("no-force-caps")
                        .help("Do not replace words of the forced-case list"),
                )
                .arg(
                    Arg::new("no-fix-quotes")
                        .long("no-fix-quotes")
                        .help("Keep typographic quotes and apostrophes"),
                )
                .arg(
                    Arg::new("custom-force")
                        .long("custom-force")
                        .help("Words to always spell as given, separated by commas, semicolons or pipes")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("custom-little")
                        .long("custom-little")
                        .help("Words to always keep lower case, separated by commas, semicolons or pipes")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("little-scope")
                        .long("little-scope")
                        .help("Where custom little words are lowered")
                        .possible_values(LittleScope::VARIANTS)
                        .ignore_case(true)
                        .takes_value(true),
                ),
        )
        .subcommand(
            Command::new("dezero")
                .about("Strip leading zeros")
                .arg(values_arg()),
        )
        .subcommand(
            Command::new("rezero")
                .about("Pad numbers with zeros to the width of the longest one")
                .arg(values_arg()),
        )
        .subcommand(
            Command::new("zero")
                .about("Pad numbers with zeros to a fixed width")
                .arg(
                    Arg::new("width")
                        .long("width")
                        .short('w')
                        .help("Number of digits")
                        .takes_value(true)
                        .required(true),
                )
                .arg(values_arg()),
        )
        .get_matches();

    let diff = matches.is_present("diff");

    match matches.subcommand() {
        Some(("case", sub_matches)) => {
            let rules = err!(rule_config(sub_matches), 5);
            if let Some(path) = sub_matches.value_of("save-config") {
                err!(config::save(&rules, Path::new(path)), 6);
            }

            let corrector = TitleCorrector::new(rules);
            let values = err!(read_values(sub_matches));
            let corrected: Vec<_> = values.iter().map(|v| corrector.apply(v)).collect();
            print_values(&values, &corrected, diff);
        }
        Some(("dezero", sub_matches)) => {
            let values = err!(read_values(sub_matches));
            print_values(&values, &ZeroMode::DeZero.apply(&values), diff);
        }
        Some(("rezero", sub_matches)) => {
            let values = err!(read_values(sub_matches));
            print_values(&values, &ZeroMode::ReZero.apply(&values), diff);
        }
        Some(("zero", sub_matches)) => {
            let width = sub_matches.value_of("width").unwrap_or_default();
            let digits =
                err!(width.parse::<usize>().map_err(|_| Error::InvalidWidth(width.into())));
            let values = err!(read_values(sub_matches));
            print_values(&values, &ZeroMode::Custom(digits).apply(&values), diff);
        }
        _ => err_str!("no subcommand given"),
    }

    ExitCode::SUCCESS
}

/// Assemble the rules from the preferences file and the command line flags.
fn rule_config(matches: &ArgMatches) -> Result<RuleConfig, Error> {
    let mut rules = match matches.value_of("config") {
        Some(path) => config::load(Path::new(path))?,
        None => RuleConfig::default(),
    };

    if matches.is_present("no-little-words") {
        rules.use_little_words = false;
    }
    if matches.is_present("no-force-caps") {
        rules.use_force_caps = false;
    }
    if matches.is_present("no-fix-quotes") {
        rules.fix_quotes = false;
    }
    if let Some(words) = matches.value_of("custom-force") {
        rules.custom_force_words = WordList::parse(words);
    }
    if let Some(words) = matches.value_of("custom-little") {
        rules.custom_little_words = WordList::parse(words);
    }
    if let Ok(scope) = matches.value_of_t::<LittleScope>("little-scope") {
        rules.custom_little_scope = scope.into();
    }

    Ok(rules)
}

fn read_values(matches: &ArgMatches) -> Result<Vec<String>, Error> {
    if let Some(values) = matches.values_of("VALUES") {
        return Ok(values.map(ToString::to_string).collect());
    }

    io::stdin()
        .lock()
        .lines()
        .collect::<Result<_, _>>()
        .map_err(|e| Error::OtherError(format!("Error while reading standard input: {e}")))
}

fn print_values(old: &[String], new: &[String], diff: bool) {
    let mut changed = 0;
    for (old, new) in old.iter().zip(new) {
        if old != new {
            changed += 1;
        }

        if !diff {
            println!("{new}");
        } else if old != new {
            println!("{old} => {new}");
        }
    }

    tracing::debug!(total = old.len(), changed, "processed values");
}
