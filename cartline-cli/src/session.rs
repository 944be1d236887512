use cartline_catalog::Catalog;
use cartline_order::{CheckoutSummary, Confirmation, Customer, CustomerKind};
use cartline_shared::models::events::{to_payload, EVENT_TARGET};
use cartline_shared::{CheckoutCompletedEvent, CustomerCreatedEvent, Masked};
use std::io::{BufRead, Write};
use crate::config::SessionConfig;
use crate::console::Console;
use crate::error::SessionError;
use crate::menu::{MenuChoice, MENU_PROMPT};

const PRODUCTS_HEADER: &str = "\n===== Available Products =====";
const CHECKOUT_HEADER: &str = "\n===== Checkout =====";
const GOODBYE: &str = "Thank you for using the shopping cart application. Goodbye!";

/// Everything the session remembers between menu steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// At most one customer; creating another replaces it.
    pub customer: Option<Customer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    UserQuit,
    CheckoutCompleted(CheckoutCompletedEvent),
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(ExitReason),
}

/// Result of handling one menu choice.
///
/// The state always comes back, also when the step failed, so a failed
/// step never loses the current customer.
#[derive(Debug)]
pub struct Step {
    pub state: SessionState,
    pub outcome: Result<Flow, SessionError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LedgerAction {
    Add,
    Remove,
}

/// Menu-driven shopping session over a fixed catalog
pub struct Session {
    catalog: Catalog,
    settings: SessionConfig,
}

impl Session {
    pub fn new(catalog: Catalog, settings: SessionConfig) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the menu loop until the user exits, checks out, or input ends.
    pub fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<(SessionState, ExitReason), SessionError> {
        let mut state = SessionState::default();

        loop {
            for line in MenuChoice::banner() {
                console.say(line)?;
            }

            let answer = match console.prompt(MENU_PROMPT) {
                Ok(answer) => answer,
                Err(SessionError::InputClosed) => return Ok((state, ExitReason::InputClosed)),
                Err(err) => return Err(err),
            };

            let choice = match MenuChoice::parse(&answer) {
                Ok(choice) => choice,
                Err(err) => {
                    self.report(console, &err)?;
                    continue;
                }
            };

            let Step { state: next, outcome } = self.step(state, choice, console);
            state = next;

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit(reason)) => return Ok((state, reason)),
                Err(SessionError::InputClosed) => return Ok((state, ExitReason::InputClosed)),
                Err(err) if err.is_recoverable() => self.report(console, &err)?,
                Err(err) => return Err(err),
            }
        }
    }

    /// Handle a single menu choice against `state`.
    pub fn step<R: BufRead, W: Write>(
        &self,
        mut state: SessionState,
        choice: MenuChoice,
        console: &mut Console<R, W>,
    ) -> Step {
        let outcome = self.dispatch(&mut state, choice, console);
        Step { state, outcome }
    }

    fn dispatch<R: BufRead, W: Write>(
        &self,
        state: &mut SessionState,
        choice: MenuChoice,
        console: &mut Console<R, W>,
    ) -> Result<Flow, SessionError> {
        match choice {
            MenuChoice::Exit => {
                console.say(GOODBYE)?;
                Ok(Flow::Exit(ExitReason::UserQuit))
            }
            MenuChoice::CreateCustomer => self.create_customer(state, console),
            MenuChoice::ListProducts => {
                self.list_products(console)?;
                Ok(Flow::Continue)
            }
            MenuChoice::AddRemoveProduct => self.update_ledger(state, console),
            MenuChoice::ViewCart => {
                let customer = state.customer.as_ref().ok_or(SessionError::NoActiveCustomer)?;
                console.say(customer.shopper().ledger_view())?;
                Ok(Flow::Continue)
            }
            MenuChoice::Checkout => self.checkout(state, console),
        }
    }

    fn create_customer<R: BufRead, W: Write>(
        &self,
        state: &mut SessionState,
        console: &mut Console<R, W>,
    ) -> Result<Flow, SessionError> {
        let name = console.prompt("Enter customer name: ")?;
        let kind: CustomerKind = console.prompt("Enter customer type (Loyal/Bargain): ")?.parse()?;

        let customer = Customer::new(name, kind);
        let profile = customer.shopper().profile();
        tracing::info!(customer = %Masked(&profile.name), kind = kind.code(), "customer created");
        publish("customer_created", &CustomerCreatedEvent::new(profile.id, kind.code()));

        state.customer = Some(customer);
        Ok(Flow::Continue)
    }

    fn list_products<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<(), SessionError> {
        console.say(PRODUCTS_HEADER)?;
        for line in self.catalog.listing() {
            console.say(line)?;
        }
        Ok(())
    }

    fn update_ledger<R: BufRead, W: Write>(
        &self,
        state: &mut SessionState,
        console: &mut Console<R, W>,
    ) -> Result<Flow, SessionError> {
        let customer = state.customer.as_mut().ok_or(SessionError::NoActiveCustomer)?;

        self.list_products(console)?;

        let index = console.prompt_number("Enter product index to add/remove (0 to cancel): ")?;
        if index == 0 {
            return Ok(Flow::Continue);
        }

        let product = self
            .catalog
            .by_position(index)
            .ok_or(SessionError::InvalidProductIndex(index))?;

        let action = if self.settings.allow_remove {
            let answer = console.prompt("Add or remove? (add/remove): ")?;
            match answer.trim().to_lowercase().as_str() {
                "add" => LedgerAction::Add,
                "remove" => LedgerAction::Remove,
                _ => return Err(SessionError::InvalidAction(answer.trim().to_string())),
            }
        } else {
            LedgerAction::Add
        };

        let requested = console.prompt_number(&format!(
            "Enter the quantity of '{}' to add/remove: ",
            product.name
        ))?;
        if requested < 0 {
            return Err(SessionError::InvalidQuantity(requested));
        }
        let quantity = u32::try_from(requested).unwrap_or(u32::MAX);

        let shopper = customer.shopper_mut();
        match action {
            LedgerAction::Add => shopper.add(product, quantity),
            LedgerAction::Remove => shopper.remove(product, quantity),
        }

        Ok(Flow::Continue)
    }

    fn checkout<R: BufRead, W: Write>(
        &self,
        state: &SessionState,
        console: &mut Console<R, W>,
    ) -> Result<Flow, SessionError> {
        let customer = state.customer.as_ref().ok_or(SessionError::NoActiveCustomer)?;
        let summary = CheckoutSummary::prepare(customer)?;

        console.say(CHECKOUT_HEADER)?;
        console.say(&summary.description)?;

        match Confirmation::parse(&console.prompt("Confirm checkout? (yes/no): ")?) {
            Confirmation::Confirmed => {
                console.say("Thank you for your purchase!")?;
                let event = summary.complete();
                publish("checkout_completed", &event);
                Ok(Flow::Exit(ExitReason::CheckoutCompleted(event)))
            }
            Confirmation::Declined => {
                console.say("Checkout canceled. Continue shopping.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn report<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        err: &SessionError,
    ) -> Result<(), SessionError> {
        tracing::debug!(error = ?err, "menu step rejected");
        console.say(err.to_string())
    }
}

/// No event bus here: events go to the log as JSON.
fn publish<E: serde::Serialize>(name: &str, event: &E) {
    match to_payload(event) {
        Ok(payload) => tracing::info!(target: EVENT_TARGET, event = name, %payload),
        Err(e) => tracing::error!("Failed to serialize {} event: {}", name, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(allow_remove: bool) -> Session {
        Session::new(Catalog::default(), SessionConfig { allow_remove })
    }

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn with_customer(kind: CustomerKind) -> SessionState {
        SessionState {
            customer: Some(Customer::new("Ada", kind)),
        }
    }

    #[test]
    fn test_create_customer_replaces_current() {
        let session = session(false);
        let mut io = console("Bo\nbargain\n");

        let step = session.step(with_customer(CustomerKind::Loyal), MenuChoice::CreateCustomer, &mut io);
        assert_eq!(step.outcome.unwrap(), Flow::Continue);

        let customer = step.state.customer.unwrap();
        assert_eq!(customer.shopper().name(), "Bo");
        assert_eq!(customer.shopper().kind(), CustomerKind::BargainHunter);
    }

    #[test]
    fn test_invalid_customer_type_keeps_state() {
        let session = session(false);
        let before = with_customer(CustomerKind::Loyal);
        let mut io = console("Zed\nBanana\n");

        let step = session.step(before.clone(), MenuChoice::CreateCustomer, &mut io);
        assert!(matches!(step.outcome, Err(SessionError::InvalidCustomerType(_))));
        assert_eq!(step.state, before);
    }

    #[test]
    fn test_steps_requiring_customer() {
        let session = session(false);
        for choice in [MenuChoice::AddRemoveProduct, MenuChoice::ViewCart, MenuChoice::Checkout] {
            let mut io = console("");
            let step = session.step(SessionState::default(), choice, &mut io);
            assert!(matches!(step.outcome, Err(SessionError::NoActiveCustomer)));
            assert_eq!(step.state, SessionState::default());
        }
    }

    #[test]
    fn test_add_product() {
        let session = session(false);
        let mut io = console("1\n2\n");

        let step = session.step(with_customer(CustomerKind::Loyal), MenuChoice::AddRemoveProduct, &mut io);
        assert_eq!(step.outcome.unwrap(), Flow::Continue);

        let shirt = session.catalog().by_position(1).unwrap();
        let customer = step.state.customer.unwrap();
        assert_eq!(customer.shopper().ledger().quantity_of(shirt.id), Some(2));
    }

    #[test]
    fn test_add_product_rejections() {
        let session = session(false);

        let mut io = console("0\n");
        let step = session.step(with_customer(CustomerKind::Loyal), MenuChoice::AddRemoveProduct, &mut io);
        assert_eq!(step.outcome.unwrap(), Flow::Continue);
        assert!(step.state.customer.unwrap().shopper().is_empty());

        let mut io = console("7\n");
        let step = session.step(with_customer(CustomerKind::Loyal), MenuChoice::AddRemoveProduct, &mut io);
        assert!(matches!(step.outcome, Err(SessionError::InvalidProductIndex(7))));

        let mut io = console("2\n-3\n");
        let step = session.step(with_customer(CustomerKind::BargainHunter), MenuChoice::AddRemoveProduct, &mut io);
        assert!(matches!(step.outcome, Err(SessionError::InvalidQuantity(-3))));
        assert!(step.state.customer.unwrap().shopper().is_empty());

        let mut io = console("2\nlots\n");
        let step = session.step(with_customer(CustomerKind::BargainHunter), MenuChoice::AddRemoveProduct, &mut io);
        assert!(matches!(step.outcome, Err(SessionError::MalformedNumericInput(_))));
    }

    #[test]
    fn test_remove_path_when_enabled() {
        let session = session(true);
        let mut io = console("4\nadd\n3\n4\nremove\n1\n4\nswap\n");

        let step = session.step(with_customer(CustomerKind::BargainHunter), MenuChoice::AddRemoveProduct, &mut io);
        let step = session.step(step.state, MenuChoice::AddRemoveProduct, &mut io);
        assert_eq!(step.outcome.unwrap(), Flow::Continue);

        let hat = session.catalog().by_position(4).unwrap();
        assert_eq!(
            step.state.customer.as_ref().unwrap().shopper().ledger().quantity_of(hat.id),
            Some(2)
        );

        let step = session.step(step.state, MenuChoice::AddRemoveProduct, &mut io);
        assert!(matches!(step.outcome, Err(SessionError::InvalidAction(text)) if text == "swap"));
    }

    #[test]
    fn test_checkout_empty_ledger() {
        let session = session(false);
        let mut io = console("");

        let step = session.step(with_customer(CustomerKind::Loyal), MenuChoice::Checkout, &mut io);
        assert!(matches!(step.outcome, Err(SessionError::EmptyLedgerAtCheckout)));

        let output = String::from_utf8(io.into_output()).unwrap();
        assert!(!output.contains("Confirm checkout?"));
    }

    #[test]
    fn test_checkout_confirmed() {
        let session = session(false);
        let mut state = with_customer(CustomerKind::BargainHunter);
        let hat = session.catalog().by_position(4).unwrap().clone();
        state.customer.as_mut().unwrap().shopper_mut().add(&hat, 2);

        let mut io = console("Yes\n");
        let step = session.step(state, MenuChoice::Checkout, &mut io);

        match step.outcome.unwrap() {
            Flow::Exit(ExitReason::CheckoutCompleted(event)) => {
                assert_eq!(event.total_cents, 3000);
                assert_eq!(event.item_count, 2);
            }
            other => panic!("expected checkout exit, got {:?}", other),
        }

        let output = String::from_utf8(io.into_output()).unwrap();
        assert!(output.contains("===== Checkout =====\nBargain Hunter: Ada\nShopping Cart:\nHat - $15.0 - Quantity: 2\nTotal amount: $30.00\n"));
        assert!(output.ends_with("Thank you for your purchase!\n"));
    }
}
