//! Localized natural-language descriptions of regex patterns.
//!
//! # Table of contents
//! * [Description](#description)
//! * [Config](#config)
//! * [Dialects](#dialects)
//! * [CLI tool](#cli-tool)
//! * [Feature flags](#feature-flags)
//!
//! # Description
//!
//! Explains what a regex matches in plain words: `[A-Z]{3,}` becomes
//! `at least 3-times (any char between A and Z)`. Pattern is parsed with `regex-syntax` into a
//! [`Node`] tree which is then walked recursively, every node turning into a phrase built
//! exclusively from configured words.
//!
//! ```rust
//! use regex_describe::{Config, RegexDescription};
//!
//! let description = RegexDescription::new("DTB_[0-9]{3}", Config::english())
//!     .expect("pattern did not parse");
//!
//! assert_eq!(
//!     description.describe(),
//!     "(DTB_) and 3-times (any char between 0 and 9)"
//! );
//! ```
//!
//! Trees can also be built by hand and described with [`RegexDescription::from_node`] or
//! [`describe()`].
//!
//! # Config
//!
//! [`Config`] combines [`Vocabulary`] (translation for every word that can appear in output)
//! with [`Formatting`] (how lists are joined). There are two presets: [`Config::english`] and
//! [`Config::german`].
//!
//! With `deserialize` feature config can be loaded from any serde format. See `vocabularies`
//! folder for full reference:
//!
//! ```rust
//! # #[cfg(feature = "deserialize")]
//! # {
//! use regex_describe::{Config, RegexDescription};
//!
//! let content = std::fs::read_to_string("vocabularies/german.ron").expect("reading config");
//! let config = ron::from_str::<Config>(&content).expect("config did not parse");
//!
//! assert_eq!(
//!     RegexDescription::new("cat|dog|fish", config).unwrap().describe(),
//!     "(cat), (dog) oder (fish)"
//! );
//! # }
//! ```
//!
//! Formatting is optional and defaults to comma shortened lists: `A, B or C` instead of
//! `A or B or C`.
//!
//! # Dialects
//!
//! [`Dialect::Perl`] is used by default. It keeps Perl classes like `\d` ASCII only which keeps
//! descriptions short, everything else including `[äöü]` is Unicode. [`Dialect::Unicode`]
//! makes Perl classes Unicode aware too.
//!
//! # CLI tool
//!
//! You can run CLI tool by enabling `cli` feature: `cargo run --features=cli -- --help`.
//!
//! `echo '[A-Za-z _]' | cargo run --features=cli -- -l german` will describe it in german.
//!
//! # Feature flags
//!
//! Name | Description | Default?
//! ---|---|---
//! `deserialize` | enables deserialization for [`Config`] | yes
//! `cli` | required to run CLI tool | no

mod config;
mod describe;
mod description;
mod formatting;
mod node;
mod parse;
mod vocabulary;

#[cfg(feature = "deserialize")]
mod deserialize;

pub use config::Config;
pub use describe::describe;
pub use description::{CreationError, RegexDescription};
pub use formatting::Formatting;
pub use node::Node;
pub use parse::{parse, Dialect, SyntaxError};
pub use vocabulary::{Key, Vocabulary};
