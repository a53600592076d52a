//! Endpoint facades, one pair per resource group.
//!
//! # Design
//! Each group has a raw endpoint, reachable from `MastodonHttpClient`, that
//! returns the unclassified `HttpResponse`, and a typed endpoint, reachable
//! from `MastodonHttpService`, that wraps the raw one and turns the response
//! into an envelope. Every operation takes `impl Into<Options>`, so callers
//! pass either the options value or the primitive argument it converts from.
//! One call is one request; endpoints hold nothing but a borrow of the client.

mod accounts;
mod statuses;
mod timelines;

pub use accounts::{AccountsEndpoint, AccountsRawEndpoint};
pub use statuses::{StatusesEndpoint, StatusesRawEndpoint};
pub use timelines::{TimelinesEndpoint, TimelinesRawEndpoint};
