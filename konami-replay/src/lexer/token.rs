use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments and whitespace (skipped)
    #[regex(r"//[^\n]*", logos::skip)]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", logos::skip)]
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Comment,

    // Keywords, case-insensitive like key names
    #[token("reset", ignore(ascii_case))]
    Reset,

    #[token("attach", ignore(ascii_case))]
    Attach,

    #[token("detach", ignore(ascii_case))]
    Detach,

    // Text field delimiters
    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    // Key names, resolved by the parser
    #[regex(r"[A-Za-z0-9_]+", |lex| lex.slice().to_string())]
    Key(String),
}

impl Token {
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Reset | Token::Attach | Token::Detach)
    }
}
