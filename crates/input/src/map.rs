//! Line mapping from menu input to actions.

use std::num::IntErrorKind;

use thiserror::Error;

use crate::types::MenuAction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuParseError {
    #[error("no option entered")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("unknown option {0}")]
    UnknownOption(i64),
}

/// Map one input line to a menu action.
pub fn parse_menu_line(line: &str) -> Result<MenuAction, MenuParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(MenuParseError::Empty);
    }

    // Integers too wide for i64 still count as numbers, just out of range.
    let option: i64 = match trimmed.parse() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(MenuParseError::NotANumber(trimmed.to_string())),
        },
    };

    u32::try_from(option)
        .ok()
        .and_then(MenuAction::from_option)
        .ok_or(MenuParseError::UnknownOption(option))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_numbers() {
        assert_eq!(parse_menu_line("0"), Ok(MenuAction::Quit));
        assert_eq!(parse_menu_line("1"), Ok(MenuAction::PlayFront));
        assert_eq!(parse_menu_line("2"), Ok(MenuAction::Reserve));
        assert_eq!(parse_menu_line("3"), Ok(MenuAction::UseReserved));
        assert_eq!(parse_menu_line("4"), Ok(MenuAction::SimpleExchange));
        assert_eq!(parse_menu_line("5"), Ok(MenuAction::MultiExchange));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse_menu_line("  2\n"), Ok(MenuAction::Reserve));
        assert_eq!(parse_menu_line("\t5\r\n"), Ok(MenuAction::MultiExchange));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(parse_menu_line("\n"), Err(MenuParseError::Empty));
        assert_eq!(
            parse_menu_line("abc"),
            Err(MenuParseError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_menu_line("2.5"),
            Err(MenuParseError::NotANumber("2.5".to_string()))
        );
        assert_eq!(parse_menu_line("6"), Err(MenuParseError::UnknownOption(6)));
    }

    #[test]
    fn test_out_of_range_numbers() {
        assert_eq!(parse_menu_line("-1"), Err(MenuParseError::UnknownOption(-1)));
        assert_eq!(
            parse_menu_line("4294967296"),
            Err(MenuParseError::UnknownOption(4_294_967_296))
        );
        assert_eq!(
            parse_menu_line("99999999999999999999999"),
            Err(MenuParseError::UnknownOption(i64::MAX))
        );
        assert_eq!(
            parse_menu_line("-99999999999999999999999"),
            Err(MenuParseError::UnknownOption(i64::MIN))
        );
    }
}
