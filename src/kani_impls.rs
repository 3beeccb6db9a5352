//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Settings, UrlBuilder, UserInfo, encode_component, is_unreserved};

/// Characters drawn for arbitrary components, delimiters included
const COMPONENT_CHARS: &[u8] = b"ab1-.~ :/?#@&=%";

fn arbitrary_char() -> char {
    let idx: usize = kani::any();
    char::from(COMPONENT_CHARS[idx % COMPONENT_CHARS.len()])
}

/// Generate a short string (0-3 chars) for tractability
fn arbitrary_string() -> String {
    let len: usize = kani::any();
    let len = len % 4;
    (0..len).map(|_| arbitrary_char()).collect()
}

fn arbitrary_option() -> Option<String> {
    if kani::any() { Some(arbitrary_string()) } else { None }
}

impl kani::Arbitrary for UserInfo {
    fn any() -> Self {
        let user_name = arbitrary_string();
        match arbitrary_option() {
            Some(password) => UserInfo::with_password(user_name, password),
            None => UserInfo::new(user_name),
        }
    }
}

impl kani::Arbitrary for Settings {
    fn any() -> Self {
        let mut settings = Settings::new(arbitrary_string());
        if kani::any() {
            settings.user_info = Some(kani::any());
        }
        settings.host = arbitrary_option();
        settings.port = if kani::any() { Some(kani::any()) } else { None };
        if kani::any() {
            settings.paths.push(arbitrary_string());
        }
        if kani::any() {
            settings.parameters.push(arbitrary_string(), arbitrary_string());
        }
        settings.fragment = arbitrary_option();
        settings
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: build fails exactly when the scheme is empty
#[kani::proof]
#[kani::unwind(8)]
fn proof_build_fails_only_on_empty_scheme() {
    let settings: Settings = kani::any();
    let empty = settings.scheme.is_empty();
    let result = UrlBuilder::new("x").with_settings(settings).build();
    assert_eq!(result.is_err(), empty);
}

/// Proof: without a host, neither the authority prefix nor the port appear
#[kani::proof]
#[kani::unwind(8)]
fn proof_no_host_no_authority() {
    let mut settings: Settings = kani::any();
    settings.scheme = "s".to_string();
    settings.host = None;
    settings.paths.clear();
    settings.parameters = crate::QueryParams::new();
    settings.fragment = None;

    let url = UrlBuilder::new("s").with_settings(settings).build().expect("non-empty scheme");
    assert_eq!(url, "s:");
}

/// Proof: encoded components contain only unreserved bytes and escapes
#[kani::proof]
#[kani::unwind(14)]
fn proof_encoding_alphabet() {
    let input = arbitrary_string();
    let encoded = encode_component(&input);
    assert!(
        encoded
            .bytes()
            .all(|b| is_unreserved(b) || b == b'%' || b.is_ascii_hexdigit())
    );
}

/// Proof: a clone builds the same URL as its source
#[kani::proof]
#[kani::unwind(8)]
fn proof_clone_builds_identically() {
    let settings: Settings = kani::any();
    let builder = UrlBuilder::new("x").with_settings(settings);
    assert_eq!(builder.clone().build(), builder.build());
}
