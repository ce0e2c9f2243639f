mod utils;

use regex_describe::{Config, Formatting, RegexDescription, Vocabulary};
use std::{fs, path::PathBuf};
use utils::read_sample_patterns;

pub fn read_config(filename: PathBuf) -> Config {
    let content = fs::read_to_string(&filename).unwrap();
    serde_json::from_str::<Config>(&content)
        .expect(&format!("parsing config {}", filename.display()))
}

#[test]
fn json_vocabularies_work() {
    let patterns = read_sample_patterns();

    let mut tested_at_least_one = false;

    for entry in fs::read_dir("vocabularies").unwrap() {
        let path = entry.unwrap().path();

        if !path.is_file() {
            continue;
        }

        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }

        println!("running {}", path.display());
        let config = read_config(path);
        for pattern in &patterns {
            let description = RegexDescription::new(pattern, config.clone())
                .expect(&format!("parsing pattern {pattern}"));

            if !pattern.is_empty() {
                assert!(!description.describe().is_empty(), "{pattern}");
            }
        }
        tested_at_least_one = true;
    }

    assert!(tested_at_least_one);
}

#[test]
fn json_formatting_applied() {
    let config = read_config(PathBuf::from("vocabularies/english.json"));

    assert_eq!(
        config,
        Config::new(
            Vocabulary::ENGLISH,
            Formatting {
                shorten_lists: false,
                indent: " ".to_owned(),
            }
        )
    );
    assert_eq!(
        RegexDescription::new("^cat$", config).unwrap().describe(),
        "start of text and (cat) and end of text"
    );
}
