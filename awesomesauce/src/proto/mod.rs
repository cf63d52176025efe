//! Wire format of the Awesomesauce gateway.
//!
//! - [`request`] - Outbound XML request documents
//! - [`response`] - Classification of inbound XML/HTML bodies
//! - [`authorization`] - Opaque tokens threading a transaction across calls

pub mod authorization;
pub mod request;
pub mod response;

pub use authorization::AuthorizationToken;
pub use request::RequestParameters;
pub use response::{NormalizedResponse, Outcome};
