use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};

use regex_describe::{Config, Dialect, RegexDescription};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Language {
    English,
    German,
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Builtin vocabulary, ignored if config is provided
    #[arg(short, long, value_enum, default_value_t = Language::English)]
    language: Language,

    /// Config file path (currently only ron supported)
    #[arg(short, long, group = "config_def")]
    config: Option<PathBuf>,

    /// Directly provided config (ron format)
    #[arg(long, group = "config_def")]
    config_string: Option<String>,

    /// Use unicode aware classes: \d includes all decimal digits
    #[arg(short, long)]
    unicode: bool,

    /// Do not use commas in long lists
    #[arg(long)]
    no_shorten: bool,

    /// Text around joiner words
    #[arg(long)]
    indent: Option<String>,

    /// Patterns to describe. Reads from stdin if unset
    patterns: Vec<String>,
}

fn load_config(args: &Args) -> Result<Config, String> {
    let config = if let Some(path) = &args.config {
        let content =
            fs::read_to_string(path).map_err(|err| format!("reading config file: {err}"))?;
        ron::from_str::<Config>(&content).map_err(|err| format!("parsing config: {err}"))?
    } else if let Some(content) = &args.config_string {
        ron::from_str::<Config>(content).map_err(|err| format!("parsing config: {err}"))?
    } else {
        match args.language {
            Language::English => Config::english(),
            Language::German => Config::german(),
        }
    };

    if !args.no_shorten && args.indent.is_none() {
        return Ok(config);
    }

    let mut formatting = config.formatting().clone();
    if args.no_shorten {
        formatting.shorten_lists = false;
    }
    if let Some(indent) = &args.indent {
        formatting.indent = indent.clone();
    }

    Ok(Config::new(config.vocabulary().clone(), formatting))
}

// returns false if pattern did not parse
fn describe_pattern(pattern: &str, dialect: Dialect, config: &Config) -> bool {
    match RegexDescription::with_dialect(pattern, dialect, config.clone()) {
        Ok(description) => {
            println!("{description}");
            true
        }
        Err(err) => {
            eprintln!("{err}");
            false
        }
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let config = load_config(&args)?;
    let dialect = if args.unicode {
        Dialect::Unicode
    } else {
        Dialect::Perl
    };

    let mut failed = 0;

    if args.patterns.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.map_err(|err| format!("reading line: {err}"))?;
            if !describe_pattern(&line, dialect, &config) {
                failed += 1;
            }
        }
    } else {
        for pattern in &args.patterns {
            if !describe_pattern(pattern, dialect, &config) {
                failed += 1;
            }
        }
    }

    if failed != 0 {
        return Err(format!("{failed} pattern(s) failed to parse"));
    }

    Ok(())
}
