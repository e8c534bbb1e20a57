//! Grammar rules for size terms and axis specifications.
//!
//! Each term must match one complete form. Numeric forms are tried before
//! keywords, so a term is never classified by a stray letter inside it.

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map, opt, recognize, value},
    sequence::{pair, terminated},
    IResult,
};
use tracing::debug;

use rgrid_core::{AxisSpec, CompositeSpec, ParseError, SizeTerm, Span};

use crate::lexer::*;

/// A term recognised by shape, before its number is checked for range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawTerm<'a> {
    Percent(&'a str),
    Fixed(&'a str),
    Remainder,
    Preferred,
    Minimum,
}

/// Optionally negative run of decimal digits.
fn integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1))(input)
}

fn percent(input: &str) -> IResult<&str, &str> {
    terminated(integer, pair(space0, char('%')))(input)
}

fn preferred(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("preferred"), tag_no_case("pref"), tag_no_case("p")))(input)
}

fn minimum(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("minimum"), tag_no_case("min"), tag_no_case("m")))(input)
}

fn raw_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    all_consuming(alt((
        map(percent, RawTerm::Percent),
        map(integer, RawTerm::Fixed),
        value(RawTerm::Remainder, char('*')),
        value(RawTerm::Preferred, preferred),
        value(RawTerm::Minimum, minimum),
    )))(input)
}

fn parse_number(text: &str, token: &str, span: Span) -> Result<i32, ParseError> {
    text.parse::<i32>().map_err(|_| ParseError::InvalidNumber {
        value: token.to_string(),
        span,
    })
}

/// Explain why a token failed to match any term form.
fn reject(token: &str, span: Span) -> ParseError {
    let numeric = token.starts_with(|c: char| c.is_ascii_digit() || c == '-') || token.contains('%');
    if token.is_empty() {
        ParseError::EmptyTerm { span }
    } else if numeric {
        ParseError::InvalidNumber { value: token.to_string(), span }
    } else {
        ParseError::UnknownTerm { value: token.to_string(), span }
    }
}

/// Classify one trimmed term token located at `span`.
pub fn classify(token: &str, span: Span) -> Result<SizeTerm, ParseError> {
    let (_, raw) = raw_term(token).map_err(|_| reject(token, span))?;
    Ok(match raw {
        RawTerm::Percent(digits) => SizeTerm::Percent(f64::from(parse_number(digits, token, span)?)),
        RawTerm::Fixed(digits) => SizeTerm::Fixed(parse_number(digits, token, span)?),
        RawTerm::Remainder => SizeTerm::Remainder,
        RawTerm::Preferred => SizeTerm::MaxPreferred,
        RawTerm::Minimum => SizeTerm::MaxMinimum,
    })
}

fn parse_composite(source: &str, piece: &Piece<'_>) -> Result<CompositeSpec, ParseError> {
    if piece.text.is_empty() {
        return Err(ParseError::EmptyTerm { span: piece.span });
    }
    let terms = split_terms(source, piece)
        .iter()
        .map(|term| classify(term.text, term.span))
        .collect::<Result<Vec<_>, _>>()?;
    CompositeSpec::new(terms, piece.span)
}

/// Parse a full axis specification such as `"10%, 50, *, M"`.
pub fn parse_axis(source: &str) -> Result<AxisSpec, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::EmptyAxisSpec);
    }

    let composites = split_composites(source)
        .iter()
        .map(|piece| parse_composite(source, piece))
        .collect::<Result<Vec<_>, _>>()?;
    let axis = AxisSpec::new(composites)?;

    debug!(spec = source, count = axis.len(), "parsed axis specification");
    Ok(axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn term(token: &str) -> Result<SizeTerm, ParseError> {
        classify(token, Span::new(0, token.len()))
    }

    fn terms(axis: &AxisSpec) -> Vec<Vec<SizeTerm>> {
        axis.iter().map(|c| c.terms().to_vec()).collect()
    }

    #[test]
    fn test_classify_fixed() {
        assert_eq!(term("30").unwrap(), SizeTerm::Fixed(30));
        assert_eq!(term("0").unwrap(), SizeTerm::Fixed(0));
        assert_eq!(term("-5").unwrap(), SizeTerm::Fixed(-5));
    }

    #[test]
    fn test_classify_percent() {
        assert_eq!(term("10%").unwrap(), SizeTerm::Percent(10.0));
        assert_eq!(term("10 %").unwrap(), SizeTerm::Percent(10.0));
        assert_eq!(term("150%").unwrap(), SizeTerm::Percent(150.0));
    }

    #[test]
    fn test_classify_keywords() {
        for token in ["P", "p", "pref", "Preferred"] {
            assert_eq!(term(token).unwrap(), SizeTerm::MaxPreferred, "{token}");
        }
        for token in ["M", "m", "MIN", "minimum"] {
            assert_eq!(term(token).unwrap(), SizeTerm::MaxMinimum, "{token}");
        }
        assert_eq!(term("*").unwrap(), SizeTerm::Remainder);
    }

    #[test]
    fn test_classify_rejects_partial_matches() {
        // Tokens merely containing a keyword letter are not keywords.
        assert!(matches!(term("px"), Err(ParseError::UnknownTerm { .. })));
        assert!(matches!(term("empty"), Err(ParseError::UnknownTerm { .. })));
        assert!(matches!(term("**"), Err(ParseError::UnknownTerm { .. })));
    }

    #[test]
    fn test_classify_invalid_numbers() {
        for token in ["1x", "%", "10%%", "-", "2147483648", "5.5", "x%"] {
            assert!(
                matches!(term(token), Err(ParseError::InvalidNumber { ref value, .. }) if value == token),
                "{token}"
            );
        }
        assert_eq!(term("2147483647").unwrap(), SizeTerm::Fixed(i32::MAX));
    }

    #[test]
    fn test_classify_empty() {
        assert!(matches!(term(""), Err(ParseError::EmptyTerm { .. })));
    }

    #[test]
    fn test_parse_axis_documented_example() {
        let columns = parse_axis("10 + P,*").unwrap();
        assert_eq!(
            terms(&columns),
            vec![vec![SizeTerm::Fixed(10), SizeTerm::MaxPreferred], vec![SizeTerm::Remainder]]
        );

        let rows = parse_axis("10%, 50,*, M").unwrap();
        assert_eq!(
            terms(&rows),
            vec![
                vec![SizeTerm::Percent(10.0)],
                vec![SizeTerm::Fixed(50)],
                vec![SizeTerm::Remainder],
                vec![SizeTerm::MaxMinimum],
            ]
        );
    }

    #[test]
    fn test_parse_axis_preserves_term_order() {
        let axis = parse_axis("10+P+3%").unwrap();
        assert_eq!(axis.len(), 1);
        assert_eq!(
            axis.composites()[0].terms(),
            &[SizeTerm::Fixed(10), SizeTerm::MaxPreferred, SizeTerm::Percent(3.0)]
        );
    }

    #[test]
    fn test_parse_axis_all_delimiters() {
        let axis = parse_axis("1;2|3,4").unwrap();
        assert_eq!(axis.len(), 4);
    }

    #[test]
    fn test_parse_axis_empty() {
        assert_eq!(parse_axis(""), Err(ParseError::EmptyAxisSpec));
        assert_eq!(parse_axis("   "), Err(ParseError::EmptyAxisSpec));
    }

    #[test]
    fn test_parse_axis_empty_pieces() {
        assert_eq!(parse_axis("10,,20"), Err(ParseError::EmptyTerm { span: Span::new(3, 3) }));
        assert_eq!(parse_axis("10,20,"), Err(ParseError::EmptyTerm { span: Span::new(6, 6) }));
        assert_eq!(parse_axis("10+"), Err(ParseError::EmptyTerm { span: Span::new(3, 3) }));
        assert_eq!(parse_axis("10 + ,5"), Err(ParseError::EmptyTerm { span: Span::new(4, 4) }));
    }

    #[test]
    fn test_parse_axis_error_location() {
        let err = parse_axis("10, 1x").unwrap_err();
        assert_eq!(err, ParseError::InvalidNumber { value: "1x".into(), span: Span::new(4, 6) });

        let err = parse_axis("*, 20+abc").unwrap_err();
        assert_eq!(err, ParseError::UnknownTerm { value: "abc".into(), span: Span::new(6, 9) });
    }

    fn size_term() -> impl Strategy<Value = SizeTerm> {
        prop_oneof![
            (-1000i32..1000).prop_map(SizeTerm::Fixed),
            (0i32..=100).prop_map(|p| SizeTerm::Percent(f64::from(p))),
            Just(SizeTerm::MaxPreferred),
            Just(SizeTerm::MaxMinimum),
            Just(SizeTerm::Remainder),
        ]
    }

    proptest! {
        #[test]
        fn test_canonical_form_reparses(
            spec in prop::collection::vec(prop::collection::vec(size_term(), 1..4), 1..6)
        ) {
            let composites = spec
                .iter()
                .map(|t| CompositeSpec::new(t.iter().copied(), Span::default()).unwrap())
                .collect();
            let axis = AxisSpec::new(composites).unwrap();

            let reparsed = parse_axis(&axis.to_string()).unwrap();
            prop_assert_eq!(terms(&reparsed), spec);
        }
    }
}
