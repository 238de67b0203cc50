use crtgen_common::config::SessionDefaults;
use crtgen_common::session::Leaf;

use crate::error::ParseError;

/// Parses one trimmed host line of the form `[username@]host[:port]`.
///
/// * The username is everything before the first `@`.
/// * The port follows the last `:` after the username.
/// * Missing parts come from `defaults`.
pub fn parse_host(line: &str, defaults: &SessionDefaults) -> Result<Leaf, ParseError> {
    let (username, address) = match line.split_once('@') {
        Some((username, address)) => (username.trim(), address),
        None => (defaults.username.as_str(), line),
    };

    let (host, port) = match address.rsplit_once(':') {
        Some((host, port)) => {
            let port: u16 = port
                .trim()
                .parse::<u16>()
                .map_err(|source| ParseError::InvalidPort {
                    line: line.to_string(),
                    source,
                })?;
            (host, port)
        }
        None => (address, defaults.port),
    };

    let host: &str = host.trim();
    if host.is_empty() {
        return Err(ParseError::EmptyHost {
            line: line.to_string(),
        });
    }

    Ok(Leaf::new(host, username, port))
}
