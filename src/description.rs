use std::{error::Error, fmt};

use crate::{
    config::Config,
    describe::describe,
    node::Node,
    parse::{parse, Dialect, SyntaxError},
};

/// Parsed pattern bound to a [`Config`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexDescription {
    node: Node,
    config: Config,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreationError {
    BadPattern(SyntaxError),
}

impl CreationError {
    pub fn syntax_error(&self) -> &SyntaxError {
        match self {
            CreationError::BadPattern(err) => err,
        }
    }
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreationError::BadPattern(err) => write!(f, "pattern parsing failed: {err}"),
        }
    }
}

impl Error for CreationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.syntax_error())
    }
}

impl RegexDescription {
    /// Parses pattern using [`Dialect::Perl`]
    pub fn new(pattern: &str, config: Config) -> Result<Self, CreationError> {
        Self::with_dialect(pattern, Dialect::default(), config)
    }

    pub fn with_dialect(
        pattern: &str,
        dialect: Dialect,
        config: Config,
    ) -> Result<Self, CreationError> {
        let node = parse(pattern, dialect).map_err(|err| {
            log::debug!("rejected pattern {pattern:?}: {err}");

            CreationError::BadPattern(err)
        })?;

        log::debug!("parsed pattern {pattern:?} as {dialect:?}");

        Ok(Self::from_node(node, config))
    }

    /// Wraps already parsed pattern
    pub fn from_node(node: Node, config: Config) -> Self {
        Self { node, config }
    }

    /// Produces text description. Same input always gives the same output
    #[must_use]
    pub fn describe(&self) -> String {
        describe(&self.node, &self.config)
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Display for RegexDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
