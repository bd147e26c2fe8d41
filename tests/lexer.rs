use rill::{
    error::LexError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

fn tokens(src: &str) -> Vec<Token> {
    Lexer::new(src).collect::<Result<Vec<_>, _>>()
                   .unwrap_or_else(|e| panic!("Lexing failed: {e}\n{src}"))
}

fn kinds(src: &str) -> Vec<TokenKind> {
    tokens(src).into_iter().map(|t| t.kind).collect()
}

fn first_error(src: &str) -> LexError {
    Lexer::new(src).find_map(Result::err)
                   .unwrap_or_else(|| panic!("Lexing succeeded but was expected to fail:\n{src}"))
}

#[test]
fn ends_with_newline_then_one_end_of_input() {
    use TokenKind::{EndOfInput, Identifier, LParen, NewLine, RParen};

    assert_eq!(kinds("f()"), [Identifier, LParen, RParen, NewLine, EndOfInput]);
    assert_eq!(kinds(""), [NewLine, EndOfInput]);
}

#[test]
fn next_token_keeps_returning_end_of_input() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::NewLine);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    }
}

#[test]
fn two_character_operators_win() {
    use TokenKind::{
        BangEqual, EndOfInput, EqualEqual, Equals, Greater, GreaterEqual, Less, LessEqual,
        MinusAssign, MinusMinus, NewLine, Number, PlusAssign, PlusPlus, SlashAssign, StarAssign,
    };

    assert_eq!(kinds("+= -= *= /= ++ -- == != <= >= < > ="),
               [PlusAssign,
                MinusAssign,
                StarAssign,
                SlashAssign,
                PlusPlus,
                MinusMinus,
                EqualEqual,
                BangEqual,
                LessEqual,
                GreaterEqual,
                Less,
                Greater,
                Equals,
                NewLine,
                EndOfInput]);

    assert_eq!(kinds("5--3")[..3], [Number, MinusMinus, Number]);
    assert_eq!(kinds("5 - -3")[..4], [Number, TokenKind::Minus, TokenKind::Minus, Number]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::{
        Each, Else, ElseIf, End, Function, Identifier, If, In, Repeat, Return, Then, Var, While,
    };

    let found = kinds("if then elseif else end repeat while each in var function return iffy End");
    assert_eq!(found[..14],
               [If, Then, ElseIf, Else, End, Repeat, While, Each, In, Var, Function, Return,
                Identifier, Identifier]);
}

#[test]
fn literals_keep_their_text() {
    let found = tokens("x = 12.5 + \"hi there\"");

    assert_eq!(found[2].kind, TokenKind::Number);
    assert_eq!(found[2].text, "12.5");
    assert_eq!(found[4].kind, TokenKind::String);
    assert_eq!(found[4].text, "hi there");
}

#[test]
fn comments_and_whitespace_are_skipped() {
    use TokenKind::{EndOfInput, Equals, Identifier, NewLine, Number};

    assert_eq!(kinds("x\t=  1 % set x\r\n% only a comment"),
               [Identifier, Equals, Number, NewLine, NewLine, EndOfInput]);
}

#[test]
fn lines_are_counted() {
    let found = tokens("a = 1\n\nb = 2\n");
    let b = found.iter()
                 .find(|t| t.text == "b")
                 .expect("b is lexed");

    assert_eq!(found[0].line, 1);
    assert_eq!(b.line, 3);
}

#[test]
fn relexing_token_texts_gives_the_same_kinds() {
    let src = "var [] xs = [1, 2.5, \"hi\",]\nxs.push(3)\nif xs[0] <= 2 then\n    x += -1\nend";
    let original = tokens(src);

    // Drop the synthetic trailing newline and the end-of-input marker.
    let joined = original[..original.len() - 2].iter()
                                               .map(|t| match t.kind {
                                                   TokenKind::String => format!("\"{}\"", t.text),
                                                   _ => t.text.clone(),
                                               })
                                               .collect::<Vec<_>>()
                                               .join(" ");

    let relexed = tokens(&joined);
    assert_eq!(relexed.iter().map(|t| t.kind).collect::<Vec<_>>(),
               original.iter().map(|t| t.kind).collect::<Vec<_>>());
}

#[test]
fn malformed_literals_are_errors() {
    assert!(matches!(first_error("x = 3."), LexError::MalformedNumber { ref text, line: 1 } if text == "3."));
    assert!(matches!(first_error("\"open"), LexError::UnterminatedString { line: 1 }));
    assert!(matches!(first_error("\n\"a\\b\""),
                     LexError::IllegalCharacterInString { character: '\\', line: 2 }));
    assert!(matches!(first_error("\"tab\there\""),
                     LexError::IllegalCharacterInString { character: '\t', .. }));
    assert!(matches!(first_error("x = @"),
                     LexError::UnrecognizedCharacter { ref text, line: 1 } if text == "@"));
}

#[test]
fn iteration_stops_after_an_error() {
    let results = Lexer::new("x = $ 1").collect::<Vec<_>>();

    assert_eq!(results.len(), 3);
    assert!(results[2].is_err());
}
