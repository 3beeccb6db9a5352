//! Delimiters of the URL assembly grammar.

/// Terminates the scheme.
pub const SCHEME_DELIMITER: char = ':';

/// Introduces the authority section.
pub const AUTHORITY_PREFIX: &str = "//";

/// Terminates the user info inside the authority.
pub const USER_INFO_DELIMITER: char = '@';

/// Separates the user name from the password, and the host from the port.
pub const COMPONENT_SEPARATOR: char = ':';

/// Separates path segments.
pub const PATH_SEPARATOR: &str = "/";

/// Introduces the query.
pub const QUERY_PREFIX: char = '?';

/// Separates query parameters.
pub const PARAMETER_SEPARATOR: &str = "&";

/// Separates a parameter name from its value.
pub const NAME_VALUE_SEPARATOR: char = '=';

/// Introduces the fragment.
pub const FRAGMENT_PREFIX: char = '#';
