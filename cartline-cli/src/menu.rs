use crate::error::SessionError;

pub const MENU_PROMPT: &str = "Enter your choice: ";

const MENU_LINES: [&str; 8] = [
    "",
    "===== Command Line Menu =====",
    "1. Create a customer",
    "2. List products",
    "3. Add/remove a product to the shopping cart",
    "4. See current shopping cart",
    "5. Checkout",
    "0. Exit",
];

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    CreateCustomer,
    ListProducts,
    AddRemoveProduct,
    ViewCart,
    Checkout,
}

impl MenuChoice {
    pub fn banner() -> impl Iterator<Item = &'static str> {
        MENU_LINES.into_iter()
    }

    pub fn parse(input: &str) -> Result<Self, SessionError> {
        let number: i64 = input
            .trim()
            .parse()
            .map_err(|_| SessionError::MalformedNumericInput(input.trim().to_string()))?;
        Self::try_from(number)
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = SessionError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        match number {
            0 => Ok(MenuChoice::Exit),
            1 => Ok(MenuChoice::CreateCustomer),
            2 => Ok(MenuChoice::ListProducts),
            3 => Ok(MenuChoice::AddRemoveProduct),
            4 => Ok(MenuChoice::ViewCart),
            5 => Ok(MenuChoice::Checkout),
            other => Err(SessionError::InvalidChoice(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", MenuChoice::Exit)]
    #[case("1", MenuChoice::CreateCustomer)]
    #[case(" 2 ", MenuChoice::ListProducts)]
    #[case("3", MenuChoice::AddRemoveProduct)]
    #[case("4", MenuChoice::ViewCart)]
    #[case("5", MenuChoice::Checkout)]
    fn test_parse_valid(#[case] input: &str, #[case] expected: MenuChoice) {
        assert_eq!(MenuChoice::parse(input).unwrap(), expected);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(MenuChoice::parse("6"), Err(SessionError::InvalidChoice(6))));
        assert!(matches!(MenuChoice::parse("-1"), Err(SessionError::InvalidChoice(-1))));
        assert!(matches!(
            MenuChoice::parse("two"),
            Err(SessionError::MalformedNumericInput(text)) if text == "two"
        ));
    }

    #[test]
    fn test_banner() {
        let banner: Vec<&str> = MenuChoice::banner().collect();
        assert_eq!(banner.len(), 8);
        assert_eq!(banner[0], "");
        assert_eq!(banner[7], "0. Exit");
    }
}
