use crate::{config::Config, vocabulary::Key};

/// Quantifier phrase for `operand` repeated between `min` and `max` times. [`None`] is unbounded
pub(crate) fn describe_repetition(
    min: u32,
    max: Option<u32>,
    operand: &str,
    config: &Config,
) -> String {
    let times = config.word(Key::Times);

    match max {
        Some(max) if max == min => format!("{min}-{times} {operand}"),
        None => format!("{} {min}-{times} {operand}", config.word(Key::AtLeast)),
        // n or n+1
        Some(max) if min.checked_add(1) == Some(max) => {
            format!("{min} {} {max}-{times} {operand}", config.word(Key::Or))
        }
        Some(max) => format!(
            "{} {min} {} {max}-{times} {operand}",
            config.word(Key::Between),
            config.word(Key::And),
        ),
    }
}
