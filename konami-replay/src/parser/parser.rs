use crate::error::ReplayError;
use crate::lexer::{Lexer, Token};
use super::ast::*;
use konami_core::{InputOrigin, KeyCode, KeyEvent};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Line of the open `[`, while inside a text field
    text_field: Option<usize>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            text_field: None,
        }
    }

    pub fn parse(&mut self) -> Result<Vec<ScriptStep>, ReplayError> {
        let mut steps = Vec::new();

        while let Some(token) = self.lexer.next_token()? {
            let line = self.lexer.current_line();
            match token {
                Token::LBracket => {
                    if let Some(open) = self.text_field {
                        return Err(self.error(format!("Nested '[' inside text field opened at line {}", open)));
                    }
                    self.text_field = Some(line);
                }
                Token::RBracket => {
                    if self.text_field.take().is_none() {
                        return Err(self.error("Unexpected ']' outside a text field".to_string()));
                    }
                }
                Token::Key(name) => {
                    let event = self.parse_key(&name)?;
                    steps.push(ScriptStep { line, event: ReplayEvent::Key(event) });
                }
                keyword if keyword.is_keyword() => {
                    if self.text_field.is_some() {
                        return Err(self.error(format!("Keyword {:?} is not allowed inside a text field", keyword)));
                    }
                    let event = match keyword {
                        Token::Reset => ReplayEvent::Reset,
                        Token::Attach => ReplayEvent::Attach,
                        _ => ReplayEvent::Detach,
                    };
                    steps.push(ScriptStep { line, event });
                }
                other => {
                    return Err(self.error(format!("Unexpected token {:?}", other)));
                }
            }
        }

        if let Some(open) = self.text_field {
            return Err(ReplayError::Parse {
                line: open,
                message: "Unclosed '[' text field".to_string(),
            });
        }

        Ok(steps)
    }

    fn parse_key(&self, name: &str) -> Result<KeyEvent, ReplayError> {
        let code = KeyCode::parse(name)
            .map_err(|_| self.error(format!("Unknown key '{}'", name)))?;
        let origin = if self.text_field.is_some() {
            InputOrigin::TextInput
        } else {
            InputOrigin::Document
        };
        Ok(KeyEvent::new(code, origin))
    }

    fn error(&self, message: String) -> ReplayError {
        ReplayError::Parse {
            line: self.lexer.current_line(),
            message,
        }
    }
}

/// Parses a replay script into steps
pub fn parse_script(input: &str) -> Result<Vec<ScriptStep>, ReplayError> {
    Parser::new(input).parse()
}
