mod cursor;
mod scanner;
mod token;

pub(crate) use cursor::Cursor;
pub use scanner::Scanner;
pub use token::{Lexeme, Token, TokenKind};
