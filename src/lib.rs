//! Fluent builder that assembles URL strings from discrete components.
//!
//! # Overview
//!
//! A [`UrlBuilder`] collects a scheme, optional credentials, host, port,
//! path segments, query parameters and fragment, then renders them into a
//! single string with the right punctuation in the right places:
//!
//! ```text
//! <scheme>:[//[<user>[:<password>]@]<host>[:<port>]][/]<path>[?<query>][#<fragment>]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use url_builder::UrlBuilder;
//!
//! let url = UrlBuilder::new("https")
//!     .host("example.com")
//!     .port(8443)
//!     .path("search")
//!     .parameter("q", "rust & friends")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(url, "https://example.com:8443/search?q=rust%20%26%20friends");
//! ```
//!
//! # Branching
//!
//! Cloning a builder takes a deep snapshot, so variants of a common base
//! never interfere with each other:
//!
//! ```rust
//! use url_builder::UrlBuilder;
//!
//! let base = UrlBuilder::new("https").host("api.example.com").path("v1");
//! let users = base.clone().path("users");
//! let orders = base.clone().path("orders");
//!
//! assert_eq!(base.build().unwrap(), "https://api.example.com/v1");
//! assert_eq!(users.build().unwrap(), "https://api.example.com/v1/users");
//! assert_eq!(orders.build().unwrap(), "https://api.example.com/v1/orders");
//! ```
//!
//! # Rendering Rules
//!
//! | Component | Rendered when | Encoding |
//! |-----------|---------------|----------|
//! | Scheme | always (must be non-empty) | none |
//! | User info | host is set | none |
//! | Host | set | none |
//! | Port | host is set | decimal |
//! | Path | at least one segment | none |
//! | Query | at least one parameter | percent-encoded |
//! | Fragment | set | none |
//!
//! Presence is what counts: a port of `0` or an empty fragment is still
//! rendered.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Settings`] and its parts.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod constants;
mod encoding;
mod error;
#[cfg(kani)]
mod kani_impls;
pub mod prelude;
mod query;
mod render;
mod settings;
mod user_info;

pub use builder::UrlBuilder;
pub use constants::{
    AUTHORITY_PREFIX, COMPONENT_SEPARATOR, FRAGMENT_PREFIX, NAME_VALUE_SEPARATOR,
    PARAMETER_SEPARATOR, PATH_SEPARATOR, QUERY_PREFIX, SCHEME_DELIMITER, USER_INFO_DELIMITER,
};
pub use encoding::{encode_component, is_unreserved};
pub use error::BuildError;
pub use query::{Parameter, QueryParams};
pub use settings::Settings;
pub use user_info::UserInfo;
