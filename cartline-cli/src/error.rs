/// Everything that can go wrong while handling a menu step.
///
/// The `Display` text is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid choice. Please choose a valid option.")]
    InvalidChoice(i64),

    #[error("Invalid input '{0}'. Please enter a whole number.")]
    MalformedNumericInput(String),

    #[error("Invalid customer type. Please choose 'Loyal' or 'Bargain'.")]
    InvalidCustomerType(String),

    #[error("Please create a customer first (Option 1).")]
    NoActiveCustomer,

    #[error("Invalid product index. Please choose a valid product.")]
    InvalidProductIndex(i64),

    #[error("Invalid quantity. Quantity must be non-negative.")]
    InvalidQuantity(i64),

    #[error("You need to add products to the shopping cart before checkout.")]
    EmptyLedgerAtCheckout,

    #[error("Invalid action. Please choose 'add' or 'remove'.")]
    InvalidAction(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Recoverable errors are printed and the menu loop carries on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SessionError::InputClosed | SessionError::Io(_))
    }
}

impl From<cartline_order::CustomerError> for SessionError {
    fn from(err: cartline_order::CustomerError) -> Self {
        match err {
            cartline_order::CustomerError::InvalidType(kind) => SessionError::InvalidCustomerType(kind),
        }
    }
}

impl From<cartline_order::CheckoutError> for SessionError {
    fn from(err: cartline_order::CheckoutError) -> Self {
        match err {
            cartline_order::CheckoutError::EmptyLedger => SessionError::EmptyLedgerAtCheckout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        assert!(SessionError::InvalidChoice(9).is_recoverable());
        assert!(SessionError::MalformedNumericInput("x".into()).is_recoverable());
        assert!(SessionError::EmptyLedgerAtCheckout.is_recoverable());
        assert!(!SessionError::InputClosed.is_recoverable());
        assert!(!SessionError::Io(std::io::Error::other("broken pipe")).is_recoverable());
    }

    #[test]
    fn test_domain_error_mapping() {
        let err: SessionError = cartline_order::CustomerError::InvalidType("banana".into()).into();
        assert_eq!(err.to_string(), "Invalid customer type. Please choose 'Loyal' or 'Bargain'.");

        let err: SessionError = cartline_order::CheckoutError::EmptyLedger.into();
        assert!(matches!(err, SessionError::EmptyLedgerAtCheckout));
    }
}
