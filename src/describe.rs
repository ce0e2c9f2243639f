//! Turns [`Node`] trees into text

mod group;
mod repetition;
mod symbol;

use crate::{config::Config, node::Node, vocabulary::Key};

use group::{describe_class, describe_literal};
use repetition::describe_repetition;

/// Recursively describes node and its children. Never fails: degenerate nodes produce empty
/// strings
pub fn describe(node: &Node, config: &Config) -> String {
    log::trace!("describing {node:?}");

    match node {
        Node::Empty => String::new(),
        Node::Class(ranges) => describe_class(ranges, config),
        Node::Literal(chars) => describe_literal(chars, config),
        // newline is kept as escape, it is not a word
        Node::AnyCharNotNewline => format!(
            "{} {} \\n",
            config.word(Key::AnyChar),
            config.word(Key::Without)
        ),
        Node::AnyChar => config.word(Key::AnyChar).to_owned(),
        Node::BeginLine => config.word(Key::BeginLine).to_owned(),
        Node::EndLine => config.word(Key::EndLine).to_owned(),
        Node::BeginText => config.word(Key::BeginText).to_owned(),
        Node::EndText => config.word(Key::EndText).to_owned(),
        Node::WordBoundary => config.word(Key::WordBoundary).to_owned(),
        Node::NoWordBoundary => config.word(Key::NoWordBoundary).to_owned(),
        // a group is an alternation with one branch
        Node::Capture(sub) => describe_all(std::slice::from_ref(sub.as_ref()), Key::Or, config),
        Node::Star(sub) => describe_repetition(0, None, &describe(sub, config), config),
        Node::Plus(sub) => describe_repetition(1, None, &describe(sub, config), config),
        Node::Optional(sub) => describe_repetition(0, Some(1), &describe(sub, config), config),
        Node::Repeat { sub, min, max } => {
            describe_repetition(*min, *max, &describe(sub, config), config)
        }
        Node::Concat(subs) => describe_all(subs, Key::And, config),
        Node::Alternate(subs) => describe_all(subs, Key::Or, config),
    }
}

fn describe_all(nodes: &[Node], joiner: Key, config: &Config) -> String {
    let descriptions: Vec<_> = nodes.iter().map(|node| describe(node, config)).collect();

    config.formatting.join(&descriptions, config.word(joiner))
}
