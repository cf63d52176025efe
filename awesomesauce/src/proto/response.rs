//! Inbound response classification.
//!
//! The gateway answers with one of a handful of document shapes:
//!
//! - `<error>...</error>` when the merchant credentials are rejected
//! - `<response><success>true</success><id>...</id></response>` on approval
//! - `<response><success>false</success><code>..</code><err>..</err></response>` on decline
//! - an HTML page starting with `<h1>Oops</h1>` on an unhandled failure
//!
//! Only the root element and its direct children matter, so the body is read
//! with a pull parser that stops at the end of the root element. Anything
//! after it (trailing HTML, a second root) is ignored.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error_code::ErrorCode;
use crate::operation::Operation;

/// Classified result of a gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The gateway returned a transaction id.
    Approved {
        /// Gateway transaction id.
        transaction_id: String,
        /// Synthesized `"<operation> succeeded"` text.
        response_text: String,
    },
    /// The gateway declined or the response could not be classified.
    Declined {
        /// Canonical error code.
        error_code: ErrorCode,
        /// Text that overrides the mapped message, if any.
        response_text: Option<String>,
    },
}

/// Normalized view of a raw gateway response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedResponse {
    /// The classified outcome.
    pub outcome: Outcome,
    /// Set when the body was not a complete, well-formed document.
    ///
    /// Diagnostic only: a malformed body still classifies exactly like a
    /// gateway-declared unknown error.
    pub malformed: bool,
}

impl NormalizedResponse {
    fn declined(error_code: ErrorCode, response_text: Option<String>) -> Self {
        Self {
            outcome: Outcome::Declined {
                error_code,
                response_text,
            },
            malformed: false,
        }
    }

    /// Returns the transaction id of an approved response.
    #[must_use]
    pub fn transaction_id(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Approved { transaction_id, .. } => Some(transaction_id),
            Outcome::Declined { .. } => None,
        }
    }

    /// Returns the canonical error code of a declined response.
    #[must_use]
    pub const fn error_code(&self) -> Option<ErrorCode> {
        match &self.outcome {
            Outcome::Approved { .. } => None,
            Outcome::Declined { error_code, .. } => Some(*error_code),
        }
    }

    /// Returns the response text, if any.
    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Approved { response_text, .. } => Some(response_text),
            Outcome::Declined { response_text, .. } => response_text.as_deref(),
        }
    }

    /// Returns `true` if the gateway returned a transaction id.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self.outcome, Outcome::Approved { .. })
    }
}

/// Parses and classifies a raw response body for `operation`.
#[must_use]
pub fn parse(body: &str, operation: Operation) -> NormalizedResponse {
    let document = Document::read(body);
    let mut response = classify(document.root.as_ref(), operation);
    response.malformed |= document.malformed;
    response
}

fn classify(root: Option<&RootElement>, operation: Operation) -> NormalizedResponse {
    let Some(root) = root else {
        return NormalizedResponse::declined(ErrorCode::Unknown, None);
    };

    match root.name.as_str() {
        "error" => NormalizedResponse::declined(ErrorCode::Config, Some(root.text.clone())),
        "response" => match root.child("success") {
            Some("true") => match root.child("id") {
                Some(id) => NormalizedResponse {
                    outcome: Outcome::Approved {
                        transaction_id: id.to_owned(),
                        response_text: format!("{operation} succeeded"),
                    },
                    malformed: false,
                },
                None => NormalizedResponse {
                    malformed: true,
                    ..NormalizedResponse::declined(ErrorCode::Unknown, None)
                },
            },
            Some("false") => {
                let raw_code = root.child("code").unwrap_or_default();
                let raw_error = root.child("err").unwrap_or_default();
                NormalizedResponse::declined(ErrorCode::from_raw(raw_code, raw_error), None)
            }
            _ => NormalizedResponse::declined(ErrorCode::Unknown, None),
        },
        "h1" if root.text == "Oops" => {
            NormalizedResponse::declined(ErrorCode::Unknown, Some(format!("{operation} failed")))
        }
        _ => NormalizedResponse::declined(ErrorCode::Unknown, None),
    }
}

/// Root element with the text content of each direct child.
#[derive(Debug, Default)]
struct RootElement {
    name: String,
    /// Concatenated text of every descendant.
    text: String,
    children: Vec<(String, String)>,
}

impl RootElement {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Text content of the first direct child named `name`.
    fn child(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, text)| text.as_str())
    }
}

#[derive(Debug)]
struct Document {
    root: Option<RootElement>,
    malformed: bool,
}

impl Document {
    fn read(body: &str) -> Self {
        let mut reader = Reader::from_str(body);
        let mut root: Option<RootElement> = None;
        let mut child: Option<(String, String)> = None;
        let mut depth = 0usize;
        let mut malformed = false;

        let complete = loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => {
                    depth += 1;
                    let name = element_name(start.name().as_ref());
                    match depth {
                        1 => root = Some(RootElement::new(name)),
                        2 => child = Some((name, String::new())),
                        _ => {}
                    }
                }
                Ok(Event::Empty(empty)) => {
                    let name = element_name(empty.name().as_ref());
                    if depth == 0 {
                        root = Some(RootElement::new(name));
                        break true;
                    }
                    if depth == 1 {
                        if let Some(root) = root.as_mut() {
                            root.children.push((name, String::new()));
                        }
                    }
                }
                Ok(Event::Text(text)) => {
                    let content = text.unescape().map_or_else(
                        |_| {
                            malformed = true;
                            String::from_utf8_lossy(&text).into_owned()
                        },
                        std::borrow::Cow::into_owned,
                    );
                    append_text(root.as_mut(), child.as_mut(), depth, &content);
                }
                Ok(Event::CData(cdata)) => {
                    let content = String::from_utf8_lossy(&cdata).into_owned();
                    append_text(root.as_mut(), child.as_mut(), depth, &content);
                }
                Ok(Event::End(_)) => {
                    if depth == 2 {
                        if let (Some(root), Some(done)) = (root.as_mut(), child.take()) {
                            root.children.push(done);
                        }
                    }
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        break root.is_some();
                    }
                }
                Ok(Event::Eof) | Err(_) => break false,
                Ok(_) => {}
            }
        };

        if let (Some(root), Some(pending)) = (root.as_mut(), child.take()) {
            root.children.push(pending);
        }

        Self {
            root,
            malformed: malformed || !complete,
        }
    }
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn append_text(
    root: Option<&mut RootElement>,
    child: Option<&mut (String, String)>,
    depth: usize,
    content: &str,
) {
    if depth >= 1 {
        if let Some(root) = root {
            root.text.push_str(content);
        }
    }
    if depth >= 2 {
        if let Some((_, text)) = child {
            text.push_str(content);
        }
    }
}
