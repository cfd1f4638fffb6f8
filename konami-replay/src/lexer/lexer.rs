use logos::{Logos, Lexer as LogosLexer};
use crate::error::ReplayError;
use super::Token;

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    current_line: usize,
    last_end: usize,
    pub input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            current_line: 1,
            last_end: 0,
            input,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, ReplayError> {
        let Some(next) = self.inner.next() else {
            return Ok(None);
        };
        let span = self.inner.span();

        // Count newlines in the skipped content before this token
        let skipped = &self.input[self.last_end..span.start];
        self.current_line += skipped.chars().filter(|&c| c == '\n').count();
        self.last_end = span.end;

        match next {
            Ok(token) => Ok(Some(token)),
            Err(()) => Err(ReplayError::Parse {
                line: self.current_line,
                message: format!("Unexpected character: '{}'", &self.input[span.start..span.end]),
            }),
        }
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>, ReplayError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
