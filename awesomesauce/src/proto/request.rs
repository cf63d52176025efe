//! Outbound request documents.
//!
//! A request is a single-line XML document with a fixed `<request>` root:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?><request><action>purch</action><merchant>login</merchant><secret>password</secret><amount>1.00</amount>...</request>
//! ```

use quick_xml::escape::partial_escape;

use crate::config::Credentials;
use crate::operation::Operation;

/// XML declaration prepended to every request document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root element name of every request document.
pub const ROOT_ELEMENT: &str = "request";

/// Ordered request fields, serialized in insertion order after the
/// action and authentication elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    fields: Vec<(&'static str, String)>,
}

impl RequestParameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Sets a field. Re-setting an existing field keeps its original position.
    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
        self
    }

    /// Returns the value of a field, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Serializes a request document for `operation`.
#[must_use]
pub fn build(
    operation: Operation,
    parameters: &RequestParameters,
    credentials: &Credentials,
) -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(XML_DECLARATION);
    xml.push('<');
    xml.push_str(ROOT_ELEMENT);
    xml.push('>');

    push_element(&mut xml, "action", operation.wire_action());
    push_element(&mut xml, "merchant", credentials.login());
    push_element(&mut xml, "secret", credentials.password());
    for (name, value) in parameters.iter() {
        push_element(&mut xml, name, value);
    }

    xml.push_str("</");
    xml.push_str(ROOT_ELEMENT);
    xml.push('>');
    xml
}

/// Only `&`, `<` and `>` are escaped; quotes pass through unchanged.
fn push_element(xml: &mut String, name: &str, value: &str) {
    xml.push('<');
    xml.push_str(name);
    xml.push('>');
    xml.push_str(&partial_escape(value));
    xml.push_str("</");
    xml.push_str(name);
    xml.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("login", "password")
    }

    #[test]
    fn test_build_sale_document() {
        let mut params = RequestParameters::new();
        params
            .insert("amount", "1.00")
            .insert("currency", "USD")
            .insert("number", "4111111111111111")
            .insert("cv2", "123")
            .insert("exp", "092030");

        let xml = build(Operation::Sale, &params, &credentials());
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><request>\
             <action>purch</action><merchant>login</merchant><secret>password</secret>\
             <amount>1.00</amount><currency>USD</currency><number>4111111111111111</number>\
             <cv2>123</cv2><exp>092030</exp></request>"
        );
        assert!(!xml.contains('\n'));
    }

    #[test]
    fn test_build_reference_document() {
        let mut params = RequestParameters::new();
        params.insert("ref", "2214269051");
        let xml = build(Operation::Void, &params, &credentials());
        assert!(xml.ends_with(
            "<action>cancel</action><merchant>login</merchant><secret>password</secret>\
             <ref>2214269051</ref></request>"
        ));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut params = RequestParameters::new();
        params.insert("name", "Tom & Jerry <Inc>");
        let xml = build(
            Operation::AuthorizeOnly,
            &params,
            &Credentials::new("a&b", "p<w>"),
        );
        assert!(xml.contains("<name>Tom &amp; Jerry &lt;Inc&gt;</name>"));
        assert!(xml.contains("<merchant>a&amp;b</merchant>"));
        assert!(xml.contains("<secret>p&lt;w&gt;</secret>"));
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let mut params = RequestParameters::new();
        params.insert("name", r#"O'Brien "Jr""#);
        let xml = build(Operation::Sale, &params, &credentials());
        assert!(xml.contains(r#"<name>O'Brien "Jr"</name>"#));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = RequestParameters::new();
        params
            .insert("amount", "1.00")
            .insert("currency", "USD")
            .insert("amount", "2.00");
        let fields: Vec<_> = params.iter().collect();
        assert_eq!(fields, vec![("amount", "2.00"), ("currency", "USD")]);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("amount"), Some("2.00"));
        assert_eq!(params.get("name"), None);
    }

    #[test]
    fn test_empty_reference_is_serialized() {
        let mut params = RequestParameters::new();
        params.insert("ref", "");
        let xml = build(Operation::Refund, &params, &credentials());
        assert!(xml.contains("<ref></ref>"));
    }
}
