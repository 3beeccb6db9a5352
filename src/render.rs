//! Rendering of [`Settings`] into a URL string.
//!
//! A URL is the concatenation of five stages, each of which appends its
//! own delimiters and nothing else:
//!
//! ```text
//! <scheme>:[//[<user>[:<password>]@]<host>[:<port>]][/]<path>[?<query>][#<fragment>]
//! ```

use crate::constants::{
    AUTHORITY_PREFIX, COMPONENT_SEPARATOR, FRAGMENT_PREFIX, PATH_SEPARATOR, QUERY_PREFIX,
    SCHEME_DELIMITER, USER_INFO_DELIMITER,
};
use crate::error::BuildError;
use crate::settings::Settings;

/// Renders every stage in order.
pub(crate) fn render(settings: &Settings) -> Result<String, BuildError> {
    let mut url = String::new();
    write_scheme(settings, &mut url)?;
    write_authority(settings, &mut url);
    write_path(settings, &mut url);
    write_query(settings, &mut url);
    write_fragment(settings, &mut url);
    Ok(url)
}

fn write_scheme(settings: &Settings, url: &mut String) -> Result<(), BuildError> {
    if settings.scheme.is_empty() {
        return Err(BuildError::InvalidState {
            reason: "scheme is not defined",
        });
    }
    url.push_str(&settings.scheme);
    url.push(SCHEME_DELIMITER);
    Ok(())
}

/// User info and port are dropped when there is no host.
fn write_authority(settings: &Settings, url: &mut String) {
    let Some(host) = &settings.host else {
        return;
    };

    url.push_str(AUTHORITY_PREFIX);
    if let Some(user_info) = &settings.user_info {
        url.push_str(&user_info.to_string());
        url.push(USER_INFO_DELIMITER);
    }
    url.push_str(host);
    if let Some(port) = settings.port {
        url.push(COMPONENT_SEPARATOR);
        url.push_str(&port.to_string());
    }
}

fn write_path(settings: &Settings, url: &mut String) {
    if settings.paths.is_empty() {
        return;
    }
    if settings.has_authority() {
        url.push_str(PATH_SEPARATOR);
    }
    url.push_str(&settings.paths.join(PATH_SEPARATOR));
}

fn write_query(settings: &Settings, url: &mut String) {
    if settings.parameters.is_empty() {
        return;
    }
    url.push(QUERY_PREFIX);
    url.push_str(&settings.parameters.to_string());
}

fn write_fragment(settings: &Settings, url: &mut String) {
    if let Some(fragment) = &settings.fragment {
        url.push(FRAGMENT_PREFIX);
        url.push_str(fragment);
    }
}
