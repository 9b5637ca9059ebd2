/// Accumulates human-readable field errors produced by independent checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: Vec<String>,
}

impl FieldErrors {
    /// Creates an empty error list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one field check.
    pub fn check(&mut self, outcome: Option<impl Into<String>>) {
        if let Some(message) = outcome {
            self.messages.push(message.into());
        }
    }

    /// Returns whether no check reported an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the recorded messages in check order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        self.messages.as_slice()
    }

    /// Concatenates the messages with no separator.
    #[must_use]
    pub fn concatenated(&self) -> String {
        self.messages.concat()
    }

    /// Joins the messages with the given separator.
    #[must_use]
    pub fn joined(&self, separator: &str) -> String {
        self.messages.join(separator)
    }
}

/// Classifies a required text field as absent, blank or present.
pub(crate) enum TextField<'a> {
    Null,
    Empty,
    Present(&'a str),
}

impl<'a> TextField<'a> {
    pub(crate) fn of(value: Option<&'a String>) -> Self {
        match value {
            None => Self::Null,
            Some(text) if text.trim().is_empty() => Self::Empty,
            Some(text) => Self::Present(text.as_str()),
        }
    }
}
