//! Decoding of the assignment file written by the external solver.
//!
//! The file is read line by line:
//! - lines starting with `c` (comments) and `SAT` (the satisfiable header) are skipped;
//! - the first remaining line is split on whitespace, `0` tokens are dropped, and each other token is read as a signed integer whose sign gives the boolean at that position (negative for false);
//! - later lines are never consulted.
//!
//! Token position *i* is taken to describe atom *i + 1*.
//! Whether the solver in fact emits literals for atoms 1..*n* in increasing order is a contract with that binary, and is not checked here.

use std::io::BufRead;

use crate::structures::literal::{CLiteral, Literal};

/// Decodes an assignment from the given reader.
///
/// Returns `None` when no decodable line is found, or a token fails to read as an integer, or the reader itself fails.
/// A decodable line without tokens yields an empty assignment.
pub fn decode_model(reader: impl BufRead) -> Option<Vec<bool>> {
    for line in reader.lines() {
        let line = line.ok()?;
        if line.starts_with('c') || line.starts_with("SAT") {
            continue;
        }

        let mut model = Vec::new();
        for token in line.split_whitespace() {
            if token == "0" {
                continue;
            }
            let literal = token.parse::<CLiteral>().ok()?;
            model.push(literal.polarity());
        }
        return Some(model);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_line() {
        let model = decode_model("1 -2 3 0\n".as_bytes());
        assert_eq!(model, Some(vec![true, false, true]));
    }

    #[test]
    fn comments_and_header_skipped() {
        let model = decode_model("c a comment\nSAT\n-1 2 0\n".as_bytes());
        assert_eq!(model, Some(vec![false, true]));
    }

    #[test]
    fn first_line_only() {
        let model = decode_model("1 0\n-1 0\n".as_bytes());
        assert_eq!(model, Some(vec![true]));
    }

    #[test]
    fn comments_alone_decode_nothing() {
        assert_eq!(decode_model("c one\nc two\n".as_bytes()), None);
    }

    #[test]
    fn empty_reader_decodes_nothing() {
        assert_eq!(decode_model("".as_bytes()), None);
    }

    #[test]
    fn empty_line_is_an_empty_assignment() {
        assert_eq!(decode_model("\n1 0\n".as_bytes()), Some(vec![]));
    }

    #[test]
    fn malformed_token_decodes_nothing() {
        assert_eq!(decode_model("1 x 0\n".as_bytes()), None);
    }

    #[test]
    fn interior_zero_dropped() {
        let model = decode_model("1 0 -2 0\n".as_bytes());
        assert_eq!(model, Some(vec![true, false]));
    }
}
