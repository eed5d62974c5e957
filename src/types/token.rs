use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy)]
pub enum TokenType {
    User,
    Admin
}

impl TokenType {
    pub fn prefix(self) -> &'static str {
        match self {
            TokenType::User => "usr",
            TokenType::Admin => "adm",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::User => write!(f, "user"),
            TokenType::Admin => write!(f, "admin")
        }
    }
}
