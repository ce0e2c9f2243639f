use std::ops::RangeInclusive;

use crate::{config::Config, vocabulary::Key};

use super::symbol::render_symbol;

/// Literal run: symbols glued together, `(DTB_)`
pub(crate) fn describe_literal(chars: &[char], config: &Config) -> String {
    let symbols: Vec<_> = chars.iter().map(|&c| render_symbol(c, config)).collect();

    enclose(&config.formatting.join(&symbols, ""))
}

/// Class: choice between ranges, `(any char between A and Z or _)`
pub(crate) fn describe_class(ranges: &[RangeInclusive<char>], config: &Config) -> String {
    let choices: Vec<_> = ranges
        .iter()
        .map(|range| describe_range(range, config))
        .collect();

    enclose(&config.formatting.join(&choices, config.word(Key::Or)))
}

fn describe_range(range: &RangeInclusive<char>, config: &Config) -> String {
    let (low, high) = (*range.start(), *range.end());

    if low == high {
        return render_symbol(low, config).into_owned();
    }

    format!(
        "{} {} {} {} {}",
        config.word(Key::AnyChar),
        config.word(Key::Between),
        render_symbol(low, config),
        config.word(Key::And),
        render_symbol(high, config),
    )
}

fn enclose(s: &str) -> String {
    format!("({s})")
}
