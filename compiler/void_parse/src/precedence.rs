use void_ir::TokenKind;

/// Binding power, low to high.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `<=` `>` `>=`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// Unary `-` `!`
    Prefix,
    /// `f(...)`
    Call,
    /// `a[...]`
    Index,
}

impl Precedence {
    /// Infix binding power of a token, or `None` if it cannot continue an expression.
    pub fn of_infix(kind: TokenKind) -> Option<Precedence> {
        match kind {
            TokenKind::Equal | TokenKind::NotEqual => Some(Precedence::Equals),
            TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual => Some(Precedence::LessGreater),
            TokenKind::Plus | TokenKind::Minus => Some(Precedence::Sum),
            TokenKind::Asterisk | TokenKind::Slash => Some(Precedence::Product),
            TokenKind::LeftParen => Some(Precedence::Call),
            TokenKind::LeftBracket => Some(Precedence::Index),
            _ => None,
        }
    }
}
