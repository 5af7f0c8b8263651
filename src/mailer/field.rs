//! Conversion into normalized field values.

/// A value that can be written into a [`Mail`](super::Mail) field.
///
/// This trait is the normalization seam of the send DSL: every setter
/// accepts `impl IntoFieldValue`, and every implementation converges on a
/// plain `String` with absent input collapsing to `""`. Rust has no null,
/// so "missing" is spelled `Option`; passing `None` is the typed
/// equivalent of the absent argument the pattern tolerates.
///
/// # Examples
///
/// ```rust
/// use meander::IntoFieldValue;
///
/// assert_eq!("ava@example.com".into_field_value(), "ava@example.com");
/// assert_eq!(String::from("ben").into_field_value(), "ben");
/// assert_eq!(None::<String>.into_field_value(), "");
/// assert_eq!(Some("carol").into_field_value(), "carol");
/// ```
pub trait IntoFieldValue {
    /// Convert this input into the string stored in the field.
    fn into_field_value(self) -> String;
}

impl IntoFieldValue for String {
    fn into_field_value(self) -> String {
        self
    }
}

impl IntoFieldValue for &str {
    fn into_field_value(self) -> String {
        self.to_owned()
    }
}

impl IntoFieldValue for Option<String> {
    fn into_field_value(self) -> String {
        self.unwrap_or_default()
    }
}

impl IntoFieldValue for Option<&str> {
    fn into_field_value(self) -> String {
        self.map(str::to_owned).unwrap_or_default()
    }
}
