//! A fluent immutable builder DSL with sealed construction
//!
//! This module demonstrates the strongest form of the builder pattern: a
//! value type that callers can *shape* but never *create*. The only way to
//! obtain a [`Mail`] is to receive the hidden empty seed inside the closure
//! passed to [`Mailer::send`] or [`Mailer::send_to`], chain transformation
//! calls on it, and return the result, at which point the terminal action
//! consumes it. Nothing escapes the chain.
//!
//! Three misuses are structurally impossible, not merely discouraged:
//!
//! - **Direct construction**: `Mail` has no public constructor and no public
//!   fields, so the seed cannot be minted outside this module.
//! - **Mutation of a shared instance**: every transformation consumes its
//!   receiver and returns a fresh value; there is no `&mut` surface.
//! - **Partial states escaping**: every intermediate value in the chain is a
//!   complete, valid `Mail`, because fields default to the empty string
//!   rather than to an "unset" marker.
//!
//! # Example
//!
//! ```rust
//! use meander::Mailer;
//!
//! Mailer::send_to(
//!     |mail| {
//!         mail.with_from("ava@example.com")
//!             .with_to("ben@example.com")
//!             .with_subject("Lunch?")
//!             .with_body("Noon at the usual place.")
//!     },
//!     |mail| {
//!         assert_eq!(mail.from(), "ava@example.com");
//!         assert_eq!(mail.to(), "ben@example.com");
//!     },
//! );
//! ```
//!
//! # Normalization
//!
//! Field setters accept anything implementing [`IntoFieldValue`]: `String`,
//! `&str`, or either wrapped in `Option`. Absent input (`None`) degrades
//! silently to the empty string; there is no validation failure path and no
//! error type in this module.
//!
//! ```rust
//! use meander::Mailer;
//!
//! Mailer::send_to(
//!     |mail| mail.with_from(None::<String>).with_to("ben@example.com"),
//!     |mail| assert_eq!(mail.from(), ""),
//! );
//! ```

use std::fmt;

mod field;
#[cfg(feature = "serde")]
mod serde_impl;

pub use field::IntoFieldValue;

/// The seed of every assembly chain. Private: callers only ever see copies
/// of it through the closure passed to [`Mailer::send`].
const EMPTY: Mail = Mail {
    from: String::new(),
    to: String::new(),
    subject: String::new(),
    body: String::new(),
};

/// An immutable mail value assembled through the send DSL.
///
/// A `Mail` carries a fixed set of string fields (`from`, `to`, `subject`,
/// `body`), each defaulting to the empty string. The recognized fields are a
/// closed set of methods; a misspelled field name is a compile error rather
/// than a silent no-op.
///
/// Instances cannot be constructed directly:
///
/// ```compile_fail
/// let mail = meander::Mail {
///     from: String::from("ava@example.com"),
///     to: String::new(),
///     subject: String::new(),
///     body: String::new(),
/// };
/// ```
///
/// The only construction path is the seed supplied by [`Mailer::send`] or
/// [`Mailer::send_to`]:
///
/// ```rust
/// use meander::Mailer;
///
/// Mailer::send_to(
///     |mail| mail.with_subject("Hello"),
///     |mail| assert_eq!(mail.subject(), "Hello"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    from: String,
    to: String,
    subject: String,
    body: String,
}

impl Mail {
    /// Return a new `Mail` equal to this one with the `from` field replaced.
    ///
    /// The receiver is consumed; the returned value is a distinct instance.
    /// Absent input normalizes to the empty string.
    ///
    /// ```rust
    /// use meander::Mailer;
    ///
    /// Mailer::send_to(
    ///     |mail| mail.with_from("ava@example.com"),
    ///     |mail| assert_eq!(mail.from(), "ava@example.com"),
    /// );
    /// ```
    pub fn with_from(self, value: impl IntoFieldValue) -> Self {
        Self {
            from: value.into_field_value(),
            ..self
        }
    }

    /// Return a new `Mail` equal to this one with the `to` field replaced.
    pub fn with_to(self, value: impl IntoFieldValue) -> Self {
        Self {
            to: value.into_field_value(),
            ..self
        }
    }

    /// Return a new `Mail` equal to this one with the `subject` field replaced.
    pub fn with_subject(self, value: impl IntoFieldValue) -> Self {
        Self {
            subject: value.into_field_value(),
            ..self
        }
    }

    /// Return a new `Mail` equal to this one with the `body` field replaced.
    pub fn with_body(self, value: impl IntoFieldValue) -> Self {
        Self {
            body: value.into_field_value(),
            ..self
        }
    }

    /// The sender address, or `""` if never set.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The recipient address, or `""` if never set.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// The subject line, or `""` if never set.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The message body, or `""` if never set.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for Mail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "From: {}", self.from)?;
        writeln!(f, "To: {}", self.to)?;
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}

/// Entry point for the send DSL.
///
/// `Mailer` is a zero-sized namespace type: its associated functions are the
/// only way to start an assembly chain. Each call supplies a fresh empty
/// seed to the caller's closure, so no state survives from one send to the
/// next.
///
/// ```rust
/// use meander::Mailer;
///
/// let mut seen = Vec::new();
/// Mailer::send_to(|mail| mail.with_to("ben@example.com"), |mail| seen.push(mail));
/// Mailer::send_to(|mail| mail, |mail| seen.push(mail));
///
/// assert_eq!(seen.len(), 2);
/// assert_eq!(seen[1].to(), ""); // second chain started from a fresh seed
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Mailer;

impl Mailer {
    /// Assemble a mail and print it to standard output.
    ///
    /// The closure receives the empty seed, chains zero or more `with_*`
    /// calls on it, and returns the result. The finished mail is rendered
    /// with its [`Display`](fmt::Display) implementation and emitted; it is
    /// not observable after this call returns.
    ///
    /// ```no_run
    /// use meander::Mailer;
    ///
    /// Mailer::send(|mail| {
    ///     mail.with_from("ava@example.com")
    ///         .with_to("ben@example.com")
    ///         .with_subject("Lunch?")
    /// });
    /// ```
    pub fn send<F>(assemble: F)
    where
        F: FnOnce(Mail) -> Mail,
    {
        Self::send_to(assemble, |mail| println!("{mail}"));
    }

    /// Assemble a mail and hand it to a caller-supplied sink.
    ///
    /// This is the delegate form of [`send`](Mailer::send): the embedding
    /// application decides what "sending" means. The sink is called exactly
    /// once, with the fully assembled mail, and returns nothing; there is
    /// no failure signal back to the chain.
    ///
    /// ```rust
    /// use meander::Mailer;
    ///
    /// let mut outbox = Vec::new();
    /// Mailer::send_to(
    ///     |mail| mail.with_from("ava@example.com").with_to("ben@example.com"),
    ///     |mail| outbox.push(mail),
    /// );
    ///
    /// assert_eq!(outbox.len(), 1);
    /// assert_eq!(outbox[0].from(), "ava@example.com");
    /// ```
    pub fn send_to<F, S>(assemble: F, sink: S)
    where
        F: FnOnce(Mail) -> Mail,
        S: FnOnce(Mail),
    {
        let mail = assemble(EMPTY);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = %mail.from,
            to = %mail.to,
            subject = %mail.subject,
            "sending mail"
        );
        sink(mail);
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_send_emits_debug_event() {
        Mailer::send_to(
            |mail| mail.with_from("a@example.com").with_to("b@example.com"),
            |_| {},
        );

        assert!(logs_contain("sending mail"));
        assert!(logs_contain("a@example.com"));
    }
}
