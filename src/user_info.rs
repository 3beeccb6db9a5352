//! User credentials rendered in the authority section.

use std::fmt;

use crate::constants::COMPONENT_SEPARATOR;

/// A user name with an optional password.
///
/// Neither part is validated or encoded.
///
/// # Examples
///
/// ```
/// use url_builder::UserInfo;
///
/// let info = UserInfo::new("admin");
/// assert_eq!(info.to_string(), "admin");
///
/// let info = UserInfo::with_password("admin", "pass");
/// assert_eq!(info.to_string(), "admin:pass");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserInfo {
    user_name: String,
    password: Option<String>,
}

impl UserInfo {
    /// Creates user info without a password.
    #[must_use]
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: None,
        }
    }

    /// Creates user info with a password.
    #[must_use]
    pub fn with_password(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: Some(password.into()),
        }
    }

    /// Returns the user name.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns the password, if one was set.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.password {
            Some(password) => write!(f, "{}{COMPONENT_SEPARATOR}{password}", self.user_name),
            None => f.write_str(&self.user_name),
        }
    }
}
