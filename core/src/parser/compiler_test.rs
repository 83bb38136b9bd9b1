//! Unit tests for the bytecode compiler.

use super::*;
use crate::{
    lexer::{LexError, TokenKind},
    syntax::Span,
    vm::Instruction::{self, *},
};
use pretty_assertions::assert_eq;

fn code(source: &str) -> Vec<Instruction> {
    compile(source)
        .unwrap_or_else(|e| panic!("compilation of {:?} failed: {}", source, e))
        .into_instructions()
}

fn parse_error(source: &str) -> ParseError {
    match compile(source) {
        Err(CompileError::Parse(err)) => err,
        other => panic!("expected a parse error for {:?}, got {:?}", source, other),
    }
}

#[test]
fn test_single_number() {
    assert_eq!(code("42"), vec![Push(42)]);
    assert_eq!(code("  007  "), vec![Push(7)]);
}

#[test]
fn test_precedence_example() {
    crate::test_utils::init_test_logging();
    assert_eq!(code("3+4*2"), vec![Push(3), Push(4), Push(2), Mul, Add]);
}

#[test]
fn test_parenthesized_example() {
    assert_eq!(code("(3+4)*2"), vec![Push(3), Push(4), Add, Push(2), Mul]);
}

#[test]
fn test_left_associativity() {
    assert_eq!(code("8-3-2"), vec![Push(8), Push(3), Sub, Push(2), Sub]);
    assert_eq!(code("8/4/2"), vec![Push(8), Push(4), Div, Push(2), Div]);
}

#[test]
fn test_one_instruction_per_token() {
    let program = compile("1 + 2 * (3 - 4) / 5").unwrap();
    // 5 numbers, 4 operators; parentheses emit nothing.
    assert_eq!(program.len(), 9);
    let pushes = program.iter().filter(|i| matches!(i, Push(_))).count();
    assert_eq!(pushes, 5);
}

#[test]
fn test_deterministic() {
    let source = "(1 + 2) * 3 - 4 / (5 + 6)";
    assert_eq!(compile(source).unwrap(), compile(source).unwrap());
}

#[test]
fn test_spans_point_at_source_tokens() {
    let source = "10 / (2 - 2)";
    let program = compile(source).unwrap();
    let spans: Vec<_> = (0..program.len())
        .map(|i| program.span_of(i).unwrap().str_of(source))
        .collect();
    assert_eq!(spans, vec!["10", "2", "2", "-", "/"]);
}

#[test]
fn test_max_stack_size() {
    assert_eq!(compile("1").unwrap().max_stack_size(), 1);
    assert_eq!(compile("1 + 2 + 3 + 4").unwrap().max_stack_size(), 2);
    assert_eq!(compile("1 + (2 + (3 + 4))").unwrap().max_stack_size(), 4);
}

#[test]
fn test_largest_literal() {
    assert_eq!(code("9223372036854775807"), vec![Push(i64::MAX)]);
}

#[test]
fn test_number_out_of_range() {
    assert_eq!(
        parse_error("1 + 9223372036854775808"),
        ParseError::NumberOutOfRange {
            literal: "9223372036854775808".to_string(),
            span: Span::new(4, 23),
        }
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(
        parse_error(""),
        ParseError::UnexpectedToken {
            found: TokenKind::Eof,
            span: Span::at(0),
        }
    );
    assert_eq!(parse_error("   ").position(), 3);
}

#[test]
fn test_unary_minus_is_rejected() {
    assert_eq!(
        parse_error("-5"),
        ParseError::UnexpectedToken {
            found: TokenKind::Minus,
            span: Span::new(0, 1),
        }
    );
    assert_eq!(
        parse_error("+5"),
        ParseError::UnexpectedToken {
            found: TokenKind::Plus,
            span: Span::new(0, 1),
        }
    );
    assert_eq!(
        parse_error("2 * -3"),
        ParseError::UnexpectedToken {
            found: TokenKind::Minus,
            span: Span::new(4, 5),
        }
    );
}

#[test]
fn test_missing_operand() {
    assert_eq!(
        parse_error("1 +"),
        ParseError::UnexpectedToken {
            found: TokenKind::Eof,
            span: Span::at(3),
        }
    );
    assert_eq!(
        parse_error("()"),
        ParseError::UnexpectedToken {
            found: TokenKind::RParen,
            span: Span::new(1, 2),
        }
    );
}

#[test]
fn test_missing_close_paren() {
    assert_eq!(
        parse_error("2+(3"),
        ParseError::MissingCloseParen {
            open: Span::new(2, 3),
            found: TokenKind::Eof,
            span: Span::at(4),
        }
    );
    assert_eq!(
        parse_error("(1 2)"),
        ParseError::MissingCloseParen {
            open: Span::new(0, 1),
            found: TokenKind::Number,
            span: Span::new(3, 4),
        }
    );
}

#[test]
fn test_trailing_input() {
    assert_eq!(
        parse_error("2 3"),
        ParseError::TrailingInput {
            found: TokenKind::Number,
            span: Span::new(2, 3),
        }
    );
    assert_eq!(
        parse_error("(1))"),
        ParseError::TrailingInput {
            found: TokenKind::RParen,
            span: Span::new(3, 4),
        }
    );
}

#[test]
fn test_lex_error_propagates() {
    assert_eq!(
        compile("1 + a"),
        Err(CompileError::Lex(LexError {
            character: 'a',
            span: Span::new(4, 5),
        }))
    );
    assert!(matches!(compile("#"), Err(CompileError::Lex(_))));
}

#[test]
fn test_nesting_within_limit() {
    let source = format!("{}1{}", "(".repeat(10), ")".repeat(10));
    assert_eq!(compile_with_max_depth(&source, 10).unwrap().instructions(), &[Push(1)]);
}

#[test]
fn test_nesting_beyond_limit() {
    let source = format!("{}1{}", "(".repeat(11), ")".repeat(11));
    match compile_with_max_depth(&source, 10) {
        Err(CompileError::Parse(ParseError::MaxDepthExceeded { max_depth, span })) => {
            assert_eq!(max_depth, 10);
            assert_eq!(span, Span::new(10, 11));
        }
        other => panic!("expected MaxDepthExceeded, got {:?}", other),
    }
}

#[test]
fn test_pathological_nesting_does_not_overflow() {
    let source = "(".repeat(100_000);
    assert!(matches!(
        compile(&source),
        Err(CompileError::Parse(ParseError::MaxDepthExceeded {
            max_depth: DEFAULT_MAX_DEPTH,
            ..
        }))
    ));
}

#[test]
fn test_sibling_parentheses_do_not_accumulate_depth() {
    let source = vec!["(1)"; 50].join(" + ");
    assert!(compile_with_max_depth(&source, 1).is_ok());
}
