//! Edge case and property tests for wavec-lex

use crate::{tokenize, LexErrorKind, Lexer, Token, TokenKind};
use proptest::prelude::*;

fn lex_all(source: &str) -> Vec<Token> {
    let mut tokens = tokenize(source);
    tokens.pop();
    tokens
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    let tokens = tokenize("");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[0].span.start, 0);
}

#[test]
fn test_edge_whitespace_only() {
    let tokens = tokenize(" \t\r\n\n ");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].line, 3);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = lex_all(&format!("var {} = 1;", name));
    assert_eq!(t[1].lexeme, name);
}

#[test]
fn test_edge_crlf_counts_one_line() {
    let t = lex_all("a\r\nb\r\nc");
    let lines: Vec<_> = t.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn test_edge_adjacent_operators() {
    let kinds: Vec<_> = lex_all("<=>=!==").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::LessEqual, TokenKind::GreaterEqual, TokenKind::BangEqual, TokenKind::Equal]
    );
}

#[test]
fn test_edge_dot_before_digit_is_not_number() {
    let t = lex_all(".5");
    assert_eq!(t[0].kind, TokenKind::Dot);
    assert_eq!(t[1].kind, TokenKind::Number);
    assert_eq!(t[1].lexeme, "5");
}

#[test]
fn test_edge_slash_star_inside_string() {
    let t = lex_all("\"/* not a comment */\"");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].kind, TokenKind::String);
}

#[test]
fn test_edge_quote_inside_comment() {
    let t = lex_all("// \"\nx");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].lexeme, "x");
}

#[test]
fn test_edge_non_ascii_identifier_char() {
    let t = lex_all("café");
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].lexeme, "caf");
    assert_eq!(t[1].kind, TokenKind::Error(LexErrorKind::UnexpectedCharacter));
    assert_eq!(t[1].lexeme, "unexpected character '\\u{e9}'");
}

#[test]
fn test_edge_nul_byte_is_unexpected() {
    let t = lex_all("a\0b");
    assert_eq!(t.len(), 3);
    assert!(t[1].is_error());
    assert_eq!(t[2].lexeme, "b");
}

#[test]
fn test_edge_error_line_numbers() {
    let t = lex_all("\n\n  $");
    assert_eq!(t[0].line, 3);
    assert_eq!(t[0].span.column, 3);
}

#[test]
fn test_edge_deeply_nested_comment() {
    let source = format!("{}{}x", "/*".repeat(500), "*/".repeat(500));
    let t = lex_all(&source);
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].lexeme, "x");
}

#[test]
fn test_edge_iterator_is_fused() {
    let mut lexer = Lexer::new("");
    assert!(lexer.next().is_some());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
    assert!(lexer.next_token().is_eof());
}

// ==================== PROPERTIES ====================

/// Source made of fragments that exercise every scanning rule, including
/// errors.
fn wave_source() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "[0-9]{1,4}(\\.[0-9]{0,3})?",
        "\"[a-z \\\\\"\n]{0,8}\"?",
        "//[a-z ]{0,6}\n?",
        "/\\*[a-z*/ \n]{0,8}(\\*/)?",
        "[-+*/%:;,.(){}\\[\\]=!<>]{1,3}",
        "[ \t\r\n]{1,3}",
        "[@#$^&|~`'?é漢]",
    ];
    prop::collection::vec(fragment, 0..24).prop_map(|parts| parts.concat())
}

#[test]
fn test_property_no_panics_on_arbitrary_input() {
    proptest!(|(input in "\\PC{0,200}")| {
        let tokens = tokenize(&input);
        prop_assert!(tokens.last().is_some_and(Token::is_eof));
    });
}

#[test]
fn test_property_spans_reconstruct_source() {
    proptest!(|(source in wave_source())| {
        let tokens = tokenize(&source);
        let mut previous_end = 0;

        for token in &tokens {
            prop_assert!(token.span.start >= previous_end);
            prop_assert!(token.span.end >= token.span.start);

            // Gaps hold only whitespace and comments
            let gap = &source[previous_end..token.span.start];
            let gap_tokens = tokenize(gap);
            prop_assert_eq!(gap_tokens.len(), 1, "gap {:?} is not insignificant", gap);

            if !token.is_error() {
                prop_assert_eq!(&source[token.span.start..token.span.end], token.lexeme.as_str());
            }
            previous_end = token.span.end;
        }

        prop_assert_eq!(previous_end, source.len());
    });
}

#[test]
fn test_property_lines_follow_newlines() {
    proptest!(|(source in wave_source())| {
        let tokens = tokenize(&source);
        let mut last_line = 1;

        for token in &tokens {
            let expected = 1 + source[..token.span.start].matches('\n').count() as u32;
            prop_assert_eq!(token.line, expected);
            prop_assert!(token.line >= last_line);
            last_line = token.line;
        }
    });
}

#[test]
fn test_property_end_of_input_is_sticky() {
    proptest!(|(source in wave_source(), extra in 1usize..8)| {
        let mut lexer = Lexer::new(&source);
        let mut eof = lexer.next_token();
        while !eof.is_eof() {
            eof = lexer.next_token();
        }
        for _ in 0..extra {
            prop_assert_eq!(lexer.next_token(), eof.clone());
        }
    });
}

#[test]
fn test_property_identifiers_never_keywords_unless_exact() {
    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,12}")| {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        let is_keyword = matches!(input.as_str(), "fun" | "var" | "while" | "if" | "else");
        prop_assert_eq!(tokens[0].kind.is_keyword(), is_keyword);
        prop_assert_eq!(&tokens[0].lexeme, &input);
    });
}

#[test]
fn test_property_decimal_numbers() {
    proptest!(|(whole in "[0-9]{1,10}", frac in "[0-9]{1,10}")| {
        let input = format!("{}.{}", whole, frac);
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].lexeme, &input);
    });
}

#[test]
fn test_property_closed_strings() {
    proptest!(|(body in "[^\"\\\\]{0,50}")| {
        let source = format!("\"{}\"", body);
        let tokens = lex_all(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(crate::unescape(&tokens[0].lexeme).ok(), Some(body));
    });
}
