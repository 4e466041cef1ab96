//! Token stream behaviour of the scanner, end to end.

use pretty_assertions::assert_eq;
use rmonkey::{Scanner, TokenKind};

use TokenKind::*;

fn scan(source: &str) -> Vec<(TokenKind, &str)> {
    Scanner::new(source)
        .map(|t| (t.kind, t.literal))
        .collect()
}

#[test]
fn let_statement() {
    assert_eq!(
        scan("let five = 5;"),
        vec![
            (Let, "let"),
            (Identifier, "five"),
            (Equal, "="),
            (Int, "5"),
            (Semicolon, ";"),
            (Eof, ""),
        ]
    );
}

#[test]
fn keyword_prefix_is_still_an_identifier() {
    assert_eq!(scan("lettuce"), vec![(Identifier, "lettuce"), (Eof, "")]);
    assert_eq!(scan("iffy"), vec![(Identifier, "iffy"), (Eof, "")]);
    assert_eq!(scan("fn_"), vec![(Identifier, "fn_"), (Eof, "")]);
}

#[test]
fn equality_operators() {
    assert_eq!(
        scan("10 == 10;"),
        vec![
            (Int, "10"),
            (EqualEqual, "=="),
            (Int, "10"),
            (Semicolon, ";"),
            (Eof, ""),
        ]
    );
    assert_eq!(
        scan("10 != 9;"),
        vec![
            (Int, "10"),
            (BangEqual, "!="),
            (Int, "9"),
            (Semicolon, ";"),
            (Eof, ""),
        ]
    );
}

#[test]
fn illegal_byte_does_not_halt() {
    assert_eq!(scan("@"), vec![(Illegal, "@"), (Eof, "")]);
    assert_eq!(
        scan("a @ b"),
        vec![(Identifier, "a"), (Illegal, "@"), (Identifier, "b"), (Eof, "")]
    );
}

#[test]
fn whitespace_is_transparent() {
    assert_eq!(scan("x+y"), scan("x + y"));
    assert_eq!(scan("x+y"), scan("\tx\r\n+\n\n  y  "));
}

#[test]
fn termination_is_sticky() {
    let mut scanner = Scanner::new("1");
    let _ = scanner.next_token();
    for _ in 0..5 {
        let token = scanner.next_token();
        assert_eq!(token.kind, Eof);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn monkey_program() {
    let input = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
\treturn true;
} else {
\treturn false;
}

10 == 10;
10 != 9;
";

    let expected = vec![
        (Let, "let"),
        (Identifier, "five"),
        (Equal, "="),
        (Int, "5"),
        (Semicolon, ";"),
        (Let, "let"),
        (Identifier, "ten"),
        (Equal, "="),
        (Int, "10"),
        (Semicolon, ";"),
        (Let, "let"),
        (Identifier, "add"),
        (Equal, "="),
        (Fn, "fn"),
        (LeftParen, "("),
        (Identifier, "x"),
        (Comma, ","),
        (Identifier, "y"),
        (RightParen, ")"),
        (LeftBrace, "{"),
        (Identifier, "x"),
        (Plus, "+"),
        (Identifier, "y"),
        (Semicolon, ";"),
        (RightBrace, "}"),
        (Semicolon, ";"),
        (Let, "let"),
        (Identifier, "result"),
        (Equal, "="),
        (Identifier, "add"),
        (LeftParen, "("),
        (Identifier, "five"),
        (Comma, ","),
        (Identifier, "ten"),
        (RightParen, ")"),
        (Semicolon, ";"),
        (Bang, "!"),
        (Minus, "-"),
        (Slash, "/"),
        (Star, "*"),
        (Int, "5"),
        (Semicolon, ";"),
        (Int, "5"),
        (Less, "<"),
        (Int, "10"),
        (Greater, ">"),
        (Int, "5"),
        (Semicolon, ";"),
        (If, "if"),
        (LeftParen, "("),
        (Int, "5"),
        (Less, "<"),
        (Int, "10"),
        (RightParen, ")"),
        (LeftBrace, "{"),
        (Return, "return"),
        (True, "true"),
        (Semicolon, ";"),
        (RightBrace, "}"),
        (Else, "else"),
        (LeftBrace, "{"),
        (Return, "return"),
        (False, "false"),
        (Semicolon, ";"),
        (RightBrace, "}"),
        (Int, "10"),
        (EqualEqual, "=="),
        (Int, "10"),
        (Semicolon, ";"),
        (Int, "10"),
        (BangEqual, "!="),
        (Int, "9"),
        (Semicolon, ";"),
        (Eof, ""),
    ];

    assert_eq!(scan(input), expected);
}

#[test]
fn lines_follow_newlines() {
    let lines: Vec<_> = Scanner::new("a\nb\n\nc")
        .map(|t| t.span.line)
        .collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn tokens_outlive_scanner_as_lexemes() {
    let lexemes: Vec<_> = {
        let source = String::from("let x = 1;");
        Scanner::new(&source).map(Into::into).collect::<Vec<rmonkey::Lexeme>>()
    };
    assert_eq!(lexemes.len(), 6);
    assert_eq!(lexemes[1].literal, "x");
}
