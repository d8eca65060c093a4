//! Inset values authored as CSS text (inline `style` attributes).
//! Spec: <https://www.w3.org/TR/css-position-3/#insets>

use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::coercion::parse_numeric_literal;
use crate::inset::Inset;

/// Parse an authored CSS inset value.
///
/// - empty or `auto` -> [`Inset::Auto`]
/// - `<n>px` or a unitless `<n>` -> [`Inset::Length`]
/// - anything else (other units, percentages, functions) -> [`Inset::Raw`] of the trimmed text
pub fn parse_css_inset(text: &str) -> Inset {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Inset::Auto;
    }
    let mut input = ParserInput::new(trimmed);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(parse_inset_token)
        .unwrap_or_else(|_: ParseError<'_, ()>| Inset::Raw(trimmed.to_owned()))
}

fn parse_inset_token<'i>(input: &mut Parser<'i, '_>) -> Result<Inset, ParseError<'i, ()>> {
    let location = input.current_source_location();
    let start = input.position();
    let token = input.next()?.clone();
    let source = input.slice_from(start).trim();
    match token {
        Token::Ident(ident) if ident.eq_ignore_ascii_case("auto") => Ok(Inset::Auto),
        Token::Number { value, .. } => Ok(Inset::Length(
            parse_numeric_literal(source).unwrap_or_else(|| f64::from(value)),
        )),
        Token::Dimension {
            value, ref unit, ..
        } if unit.eq_ignore_ascii_case("px") => {
            // Re-read the digits from source so `0.1px` keeps full precision.
            let digits = source.get(..source.len().saturating_sub(unit.len()));
            Ok(Inset::Length(
                digits
                    .and_then(parse_numeric_literal)
                    .unwrap_or_else(|| f64::from(value)),
            ))
        }
        other => Err(location.new_unexpected_token_error(other)),
    }
}
