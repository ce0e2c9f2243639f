use std::{error::Error, fmt, ops::RangeInclusive};

use regex_automata::util::syntax;
use regex_syntax::{
    ast::{
        self, Ast, ClassAscii, ClassAsciiKind, ClassBracketed, ClassPerl, ClassPerlKind, ClassSet,
        ClassSetItem,
    },
    hir::{self, Class, Hir, HirKind, Look},
};

use crate::node::Node;

/// Pattern syntax flavor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// ASCII Perl classes: `\d` is `[0-9]`, `\D` is everything else. Other classes and literals
    /// are Unicode
    #[default]
    Perl,
    /// Unicode aware classes: `\d` includes all decimal digits
    Unicode,
}


/// Pattern could not be parsed
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError(regex_syntax::Error);

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for SyntaxError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

/// Parses pattern into [`Node`] tree
pub fn parse(pattern: &str, dialect: Dialect) -> Result<Node, SyntaxError> {
    let hir = match dialect {
        Dialect::Perl => parse_perl(pattern),
        Dialect::Unicode => syntax::parse_with(pattern, &syntax::Config::new()),
    }
    .map_err(SyntaxError)?;

    Ok(convert_hir(&hir))
}

fn parse_perl(pattern: &str) -> Result<Hir, regex_syntax::Error> {
    let mut ast = ast::parse::ParserBuilder::new().build().parse(pattern)?;
    ascii_perl_classes(&mut ast);

    Ok(hir::translate::TranslatorBuilder::new()
        .build()
        .translate(pattern, &ast)?)
}

// swaps \d \s \w for [[:digit:]] [[:space:]] [[:word:]], these stay ASCII in unicode mode
fn ascii_perl_classes(ast: &mut Ast) {
    match ast {
        Ast::ClassPerl(perl) => {
            let bracketed = ClassBracketed {
                span: perl.span,
                negated: false,
                kind: ClassSet::Item(ClassSetItem::Ascii(ascii_class(perl))),
            };
            *ast = Ast::ClassBracketed(Box::new(bracketed));
        }
        Ast::ClassBracketed(bracketed) => ascii_set(&mut bracketed.kind),
        Ast::Repetition(rep) => ascii_perl_classes(&mut rep.ast),
        Ast::Group(group) => ascii_perl_classes(&mut group.ast),
        Ast::Alternation(alternation) => alternation.asts.iter_mut().for_each(ascii_perl_classes),
        Ast::Concat(concat) => concat.asts.iter_mut().for_each(ascii_perl_classes),
        _ => {}
    }
}

fn ascii_set(set: &mut ClassSet) {
    match set {
        ClassSet::Item(item) => ascii_set_item(item),
        ClassSet::BinaryOp(op) => {
            ascii_set(&mut op.lhs);
            ascii_set(&mut op.rhs);
        }
    }
}

fn ascii_set_item(item: &mut ClassSetItem) {
    match item {
        ClassSetItem::Perl(perl) => {
            let ascii = ascii_class(perl);
            *item = ClassSetItem::Ascii(ascii);
        }
        ClassSetItem::Bracketed(bracketed) => ascii_set(&mut bracketed.kind),
        ClassSetItem::Union(union) => union.items.iter_mut().for_each(ascii_set_item),
        _ => {}
    }
}

fn ascii_class(perl: &ClassPerl) -> ClassAscii {
    let kind = match perl.kind {
        ClassPerlKind::Digit => ClassAsciiKind::Digit,
        ClassPerlKind::Space => ClassAsciiKind::Space,
        ClassPerlKind::Word => ClassAsciiKind::Word,
    };

    ClassAscii {
        span: perl.span,
        kind,
        negated: perl.negated,
    }
}

fn convert_hir(hir: &Hir) -> Node {
    match hir.kind() {
        HirKind::Empty => Node::Empty,
        HirKind::Literal(literal) => Node::Literal(decode_literal(&literal.0)),
        HirKind::Class(class) => convert_class(class),
        HirKind::Look(look) => convert_look(*look),
        HirKind::Repetition(rep) => {
            let sub = Box::new(convert_hir(&rep.sub));

            match (rep.min, rep.max) {
                (0, None) => Node::Star(sub),
                (1, None) => Node::Plus(sub),
                (0, Some(1)) => Node::Optional(sub),
                (min, max) => Node::Repeat { sub, min, max },
            }
        }
        HirKind::Capture(capture) => Node::capture(convert_hir(&capture.sub)),
        HirKind::Concat(subs) => Node::Concat(subs.iter().map(convert_hir).collect()),
        HirKind::Alternation(subs) => Node::Alternate(subs.iter().map(convert_hir).collect()),
    }
}

// invalid UTF-8 is read as latin-1, same as byte classes
fn decode_literal(bytes: &[u8]) -> Vec<char> {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.chars().collect(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

fn convert_class(class: &Class) -> Node {
    // byte classes are read as latin-1
    let (ranges, last): (Vec<_>, _) = match class {
        Class::Unicode(unicode) => (
            unicode.ranges().iter().map(|r| r.start()..=r.end()).collect(),
            char::MAX,
        ),
        Class::Bytes(bytes) => (
            bytes
                .ranges()
                .iter()
                .map(|r| char::from(r.start())..=char::from(r.end()))
                .collect(),
            '\u{FF}',
        ),
    };

    classify_full_range(&ranges, last).unwrap_or(Node::Class(ranges))
}

// recognizes `(?s).` and `.` which arrive as classes
fn classify_full_range(ranges: &[RangeInclusive<char>], last: char) -> Option<Node> {
    match ranges {
        [all] if all == &('\0'..=last) => Some(Node::AnyChar),
        [before, after] if before == &('\0'..='\u{9}') && after == &('\u{B}'..=last) => {
            Some(Node::AnyCharNotNewline)
        }
        _ => None,
    }
}

fn convert_look(look: Look) -> Node {
    match look {
        Look::Start => Node::BeginText,
        Look::End => Node::EndText,
        Look::StartLF | Look::StartCRLF => Node::BeginLine,
        Look::EndLF | Look::EndCRLF => Node::EndLine,
        Look::WordAsciiNegate | Look::WordUnicodeNegate => Node::NoWordBoundary,
        // \b and the word start/end variants
        _ => Node::WordBoundary,
    }
}
