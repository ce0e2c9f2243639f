/// Controls how lists of clauses are glued together
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "deserialize",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Formatting {
    /// Use commas for long lists: `A, B or C` instead of `A or B or C`
    pub shorten_lists: bool,
    /// Put around joiner words: `A<indent>or<indent>B`
    pub indent: String,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            shorten_lists: true,
            indent: " ".to_owned(),
        }
    }
}

impl Formatting {
    /// Joins items using given joiner word. Empty joiner concatenates items as is
    pub fn join<S: AsRef<str>>(&self, items: &[S], joiner: &str) -> String {
        if joiner.is_empty() {
            return items.iter().map(AsRef::as_ref).collect();
        }

        let separator = format!("{indent}{joiner}{indent}", indent = self.indent);

        match items {
            [head @ .., last] if self.shorten_lists && items.len() > 2 => {
                let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();

                format!("{}{separator}{}", head.join(", "), last.as_ref())
            }
            _ => items
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(&separator),
        }
    }
}
