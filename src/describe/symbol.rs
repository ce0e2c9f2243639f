use std::borrow::Cow;

use crate::config::Config;

/// Spells out special code points, returns everything else as is
#[inline]
pub(crate) fn render_symbol(c: char, config: &Config) -> Cow<'_, str> {
    match config.special_symbol(c) {
        Some(word) => word.into(),
        None => c.to_string().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::render_symbol;
    use crate::config::Config;

    #[test]
    fn space_is_spelled_out() {
        assert_eq!(render_symbol(' ', &Config::english()), "whitespace");
        assert_eq!(render_symbol(' ', &Config::german()), "Leerzeichen");
    }

    #[test]
    fn others_are_literal() {
        let config = Config::english();

        assert_eq!(render_symbol('a', &config), "a");
        assert_eq!(render_symbol('ю', &config), "ю");
        assert_eq!(render_symbol('\n', &config), "\n");
    }
}
