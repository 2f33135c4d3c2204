//! Connection URI parsing.
//!
//! `add` and `edit` take their target as `[user@]host[:port]`; missing
//! parts are filled from the configured defaults.

use crate::error::CliError;

/// Parses a connection URI into `(user, host, port)`.
///
/// # Errors
///
/// Fails with invalid arguments if the host part is empty or the port
/// part is not numeric.
pub fn parse_connection_uri(
    uri: &str,
    default_user: &str,
    default_port: u16,
) -> Result<(String, String, u16), CliError> {
    let (user, rest) = match uri.split_once('@') {
        Some((user, rest)) => (user.to_string(), rest),
        None => (default_user.to_string(), uri),
    };

    let (host, port) = match rest.rsplit_once(':') {
        Some((host, port)) => {
            let port = port
                .parse::<u16>()
                .map_err(|_| CliError::InvalidArguments("port must be numeric".to_string()))?;
            (host.to_string(), port)
        }
        None => (rest.to_string(), default_port),
    };

    if host.is_empty() {
        return Err(CliError::InvalidArguments(
            "host must be non-empty".to_string(),
        ));
    }

    Ok((user, host, port))
}
