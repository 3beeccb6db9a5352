//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use url_builder::prelude::*;
//!
//! let url = UrlBuilder::new("https").host("example.com").build().unwrap();
//! assert_eq!(url, "https://example.com");
//! ```
//!
//! The delimiter constants are left out; import them from the crate root.

pub use crate::{
    // Builder
    UrlBuilder,
    // State
    Parameter, QueryParams, Settings, UserInfo,
    // Encoding
    encode_component,
    // Errors
    BuildError,
};
