use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

const MASK: &str = "****";

/// Personal text (customer names) that must not reach the logs verbatim.
///
/// Formatting keeps only the first character so log lines for the same
/// customer can still be told apart: `Masked("Ada")` prints `A****`.
#[derive(Clone, Deserialize)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    fn redacted(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref().chars().next() {
            Some(initial) => write!(f, "{}{}", initial, MASK),
            None => f.write_str(MASK),
        }
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.redacted(f)
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.redacted(f)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // payloads carry the real value
        self.0.serialize(serializer)
    }
}
