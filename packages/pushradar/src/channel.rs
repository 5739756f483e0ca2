//! Channel-name validation and restricted-channel prefix checks.

use crate::error::RadarError;

/// Prefixes that mark a channel as requiring authentication.
pub const PRIVATE_PREFIX: &str = "private-";
pub const PRESENCE_PREFIX: &str = "presence-";

/// Check one character against the allowed channel-name set.
/// The set implicitly forbids spaces.
fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '=' | '@' | ',' | '.' | ';' | '-')
}

/// Validate a channel name: non-empty after trimming, every character in
/// `[A-Za-z0-9_=@,.;-]`. Returns the trimmed name on success so callers
/// transmit exactly what was validated.
pub fn validate_name(name: &str) -> Result<&str, RadarError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RadarError::EmptyChannelName);
    }
    if !trimmed.chars().all(is_allowed_char) {
        return Err(RadarError::InvalidChannelName(name.to_string()));
    }
    Ok(trimmed)
}

/// Whether a channel name carries a restricted prefix (`private-` or
/// `presence-`) and therefore requires authentication to subscribe.
pub fn requires_auth(name: &str) -> bool {
    name.starts_with(PRIVATE_PREFIX) || name.starts_with(PRESENCE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_allowed_charset() {
        let name = "aZ09_=@,.;-";
        assert_eq!(validate_name(name).unwrap(), name);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_name("  room1  ").unwrap(), "room1");
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(matches!(validate_name(""), Err(RadarError::EmptyChannelName)));
        assert!(matches!(validate_name("   "), Err(RadarError::EmptyChannelName)));
    }

    #[test]
    fn rejects_interior_spaces_and_odd_chars() {
        for bad in ["room one", "room#1", "room!", "röom", "room/1"] {
            assert!(
                matches!(validate_name(bad), Err(RadarError::InvalidChannelName(_))),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn restricted_prefixes() {
        assert!(requires_auth("private-room1"));
        assert!(requires_auth("presence-lobby"));
        assert!(!requires_auth("room1"));
        assert!(!requires_auth("privateroom"));
    }
}
