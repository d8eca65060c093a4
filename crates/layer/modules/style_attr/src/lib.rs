//! Inline style bridge: `style="..."` text to and from layer styles.
//! Spec: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

mod import;
mod serialize;

use std::collections::HashMap;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};
use log::debug;

pub use import::patch_from_style_attribute;
pub use serialize::{to_declarations, to_style_attribute};

/// A single CSS declaration of a style attribute.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase.
    pub property: String,
    /// Value trimmed of surrounding ASCII whitespace. May contain spaces.
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Parse the value of a `style` attribute into a list of declarations.
///
/// The text is tokenized as a declaration list, so a `;` inside a string, a function or a
/// block does not end the declaration. Property names are lowercased and values keep their
/// source text trimmed of ASCII whitespace. Declarations without a name, a colon or a value
/// are skipped. `!important` is kept as part of the value.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);
    let mut declarations = DeclarationListParser;
    RuleBodyParser::new(&mut parser, &mut declarations)
        .filter_map(|item| match item {
            Ok(declaration) => Some(declaration),
            Err((_, source)) => {
                debug!("skipping invalid declaration {source:?}");
                None
            }
        })
        .collect()
}

/// Keep only the last declaration of each property, preserving the order of the survivors.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn normalize_style_attribute(input: &str) -> Vec<Declaration> {
    let declarations = parse_style_attribute(input);
    let mut last_index_for_property: HashMap<&str, usize> = HashMap::new();
    for (index, declaration) in declarations.iter().enumerate() {
        last_index_for_property.insert(declaration.property.as_str(), index);
    }
    let keep: Vec<bool> = declarations
        .iter()
        .enumerate()
        .map(|(index, declaration)| {
            last_index_for_property.get(declaration.property.as_str()) == Some(&index)
        })
        .collect();
    declarations
        .into_iter()
        .zip(keep)
        .filter_map(|(declaration, last)| last.then_some(declaration))
        .collect()
}

struct DeclarationListParser;

impl<'i> DeclarationParser<'i> for DeclarationListParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _declaration_start: &ParserState,
    ) -> Result<Declaration, ParseError<'i, ()>> {
        let start = input.position();
        // Blocks and functions are consumed whole by `next`.
        while input.next_including_whitespace_and_comments().is_ok() {}
        let value = input.slice_from(start).trim_ascii();
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(Declaration {
            property: name.to_ascii_lowercase(),
            value: value.to_owned(),
        })
    }
}

impl AtRuleParser<'_> for DeclarationListParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl QualifiedRuleParser<'_> for DeclarationListParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl RuleBodyItemParser<'_, Declaration, ()> for DeclarationListParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}
