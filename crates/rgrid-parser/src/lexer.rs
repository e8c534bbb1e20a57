//! Splits an axis specification into located pieces.

use nom::{
    bytes::complete::take_till,
    character::complete::{char, one_of},
    multi::separated_list1,
    IResult, Offset,
};

use rgrid_core::Span;

/// Characters separating one column's (or row's) expression from the next.
pub const COMPOSITE_DELIMITERS: &str = ",;|";

/// Character joining the terms of one expression.
pub const TERM_DELIMITER: char = '+';

/// A trimmed slice of the source with its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'a> {
    pub text: &'a str,
    pub span: Span,
}

fn composite_list(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(
        one_of(COMPOSITE_DELIMITERS),
        take_till(|c: char| COMPOSITE_DELIMITERS.contains(c)),
    )(input)
}

fn term_list(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char(TERM_DELIMITER), take_till(|c: char| c == TERM_DELIMITER))(input)
}

/// Trim a raw slice of `source`, keeping its byte location.
fn locate<'a>(source: &str, raw: &'a str) -> Piece<'a> {
    let offset = source.offset(raw);
    let text = raw.trim();
    if text.is_empty() {
        return Piece { text, span: Span::new(offset, offset + raw.len()) };
    }
    let start = offset + (raw.len() - raw.trim_start().len());
    Piece { text, span: Span::new(start, start + text.len()) }
}

fn split<'a>(
    source: &str,
    input: &'a str,
    list: fn(&'a str) -> IResult<&'a str, Vec<&'a str>>,
) -> Vec<Piece<'a>> {
    match list(input) {
        Ok((_, raws)) => raws.into_iter().map(|raw| locate(source, raw)).collect(),
        // take_till never fails, so the list always has at least one element
        Err(_) => vec![locate(source, input)],
    }
}

/// Split the whole specification into per-column (or per-row) expressions.
pub fn split_composites(source: &str) -> Vec<Piece<'_>> {
    split(source, source, composite_list)
}

/// Split one expression (a subslice of `source`) into its terms.
pub fn split_terms<'a>(source: &str, composite: &Piece<'a>) -> Vec<Piece<'a>> {
    split(source, composite.text, term_list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(pieces: &[Piece<'a>]) -> Vec<&'a str> {
        pieces.iter().map(|p| p.text).collect()
    }

    #[test]
    fn test_split_mixed_delimiters() {
        let source = "10; 20 |30,*";
        let pieces = split_composites(source);
        assert_eq!(texts(&pieces), vec!["10", "20", "30", "*"]);
        assert_eq!(pieces[1].span, Span::new(4, 6));
        assert_eq!(&source[pieces[1].span.start..pieces[1].span.end], "20");
    }

    #[test]
    fn test_split_keeps_empty_pieces() {
        let pieces = split_composites("10,,20,");
        assert_eq!(texts(&pieces), vec!["10", "", "20", ""]);
        assert_eq!(pieces[1].span, Span::new(3, 3));
        assert_eq!(pieces[3].span, Span::new(7, 7));
    }

    #[test]
    fn test_split_terms_locations() {
        let source = "5, 10 + P +3%";
        let composites = split_composites(source);
        let terms = split_terms(source, &composites[1]);
        assert_eq!(texts(&terms), vec!["10", "P", "3%"]);
        assert_eq!(terms[0].span, Span::new(3, 5));
        assert_eq!(terms[1].span, Span::new(8, 9));
        assert_eq!(terms[2].span, Span::new(11, 13));
    }

    #[test]
    fn test_whitespace_only_piece_spans_raw_text() {
        let pieces = split_composites("1,  ,2");
        assert_eq!(pieces[1].text, "");
        assert_eq!(pieces[1].span, Span::new(2, 4));
    }
}
