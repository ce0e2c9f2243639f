use crate::config::Config;
use crate::formatting::Formatting;
use crate::vocabulary::Vocabulary;

use serde::{Deserialize, Deserializer};

// symbol table is derived, so Config is not deserialized directly
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDef {
    vocabulary: Vocabulary,
    #[serde(default)]
    formatting: Formatting,
}

impl From<ConfigDef> for Config {
    fn from(config_def: ConfigDef) -> Self {
        Self::new(config_def.vocabulary, config_def.formatting)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Config, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(ConfigDef::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, formatting::Formatting, vocabulary::Vocabulary};

    const ENGLISH_VOCABULARY: &str = r#"
    vocabulary: (
        and: "and",
        or: "or",
        between: "between",
        without: "without",
        any_char: "any char",
        begin_line: "start of line",
        end_line: "end of line",
        begin_text: "start of text",
        end_text: "end of text",
        word_boundary: "word boundary",
        no_word_boundary: "no word boundary",
        at_least: "at least",
        times: "times",
        to: "to",
        from: "from",
        whitespace: "whitespace",
    ),
    "#;

    #[test]
    fn formatting_defaults() {
        let config: Config = ron::from_str(&format!("({ENGLISH_VOCABULARY})")).unwrap();

        assert_eq!(config, Config::english());
    }

    #[test]
    fn formatting_partial() {
        let config: Config = ron::from_str(&format!(
            "({ENGLISH_VOCABULARY} formatting: (shorten_lists: false))"
        ))
        .unwrap();

        assert_eq!(
            config.formatting(),
            &Formatting {
                shorten_lists: false,
                indent: " ".to_owned(),
            }
        );
        assert_eq!(config.vocabulary(), &Vocabulary::ENGLISH);
        assert_eq!(config.special_symbol(' '), Some("whitespace"));
    }

    #[test]
    fn missing_word_rejected() {
        let without_times = ENGLISH_VOCABULARY.replace(r#"times: "times","#, "");

        assert!(ron::from_str::<Config>(&format!("({without_times})")).is_err());
    }

    #[test]
    fn unknown_word_rejected() {
        let with_extra = ENGLISH_VOCABULARY.replace("and: ", r#"nand: "nand", and: "#);

        assert!(ron::from_str::<Config>(&format!("({with_extra})")).is_err());
    }

    #[test]
    fn json() {
        let config: Config = serde_json::from_str(
            r#"{
                "vocabulary": {
                    "and": "y", "or": "o", "between": "entre", "without": "sin",
                    "any_char": "cualquier carácter", "begin_line": "inicio de línea",
                    "end_line": "fin de línea", "begin_text": "inicio del texto",
                    "end_text": "fin del texto", "word_boundary": "límite de palabra",
                    "no_word_boundary": "sin límite de palabra", "at_least": "al menos",
                    "times": "veces", "to": "a", "from": "de", "whitespace": "espacio"
                },
                "formatting": {"indent": "  "}
            }"#,
        )
        .unwrap();

        assert_eq!(config.vocabulary().or, "o");
        assert!(config.formatting().shorten_lists);
        assert_eq!(config.formatting().indent, "  ");
    }
}
