//! Serde support for [`Mail`] (feature-gated)
//!
//! Only `Serialize` is provided. A `Deserialize` implementation would be a
//! public construction path around the sealed seed, so the feature ships
//! half the pair: sinks may serialize the mail they receive, but serialized
//! data can never be turned back into a `Mail`.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::Mail;

impl Serialize for Mail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Mail", 4)?;
        state.serialize_field("from", self.from())?;
        state.serialize_field("to", self.to())?;
        state.serialize_field("subject", self.subject())?;
        state.serialize_field("body", self.body())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::Mailer;

    #[test]
    fn test_serialize_assembled_mail() {
        let mut captured = None;
        Mailer::send_to(
            |mail| mail.with_from("a@example.com").with_to("b@example.com"),
            |mail| captured = Some(mail),
        );

        let json = serde_json::to_string(&captured.unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"from":"a@example.com","to":"b@example.com","subject":"","body":""}"#
        );
    }

    #[test]
    fn test_serialize_empty_seed() {
        let mut captured = None;
        Mailer::send_to(|mail| mail, |mail| captured = Some(mail));

        let json = serde_json::to_string(&captured.unwrap()).unwrap();
        assert_eq!(json, r#"{"from":"","to":"","subject":"","body":""}"#);
    }
}
