//! Mail address parsing.
//!
//! Accepts either a bare `local@domain` or a `Display Name <local@domain>`
//! form and returns the bare address.

/// Characters allowed in an unquoted local part or domain label besides
/// ASCII alphanumerics and non-ASCII text.
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Parse `input` as a mail address, returning the canonical `local@domain`.
pub fn parse_address(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let addr_spec = match input.strip_suffix('>') {
        Some(rest) => {
            let open = rest.rfind('<')?;
            let name = rest[..open].trim();
            if !is_display_name(name) {
                return None;
            }
            rest[open + 1..].trim()
        }
        None => input,
    };

    let at = addr_spec.rfind('@')?;
    let (local, domain) = (&addr_spec[..at], &addr_spec[at + 1..]);

    if !(is_dot_atom(local) || is_quoted_string(local)) {
        return None;
    }
    if !(is_dot_atom(domain) || is_domain_literal(domain)) {
        return None;
    }

    Some(format!("{}@{}", local, domain))
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || !c.is_ascii() || ATEXT_SPECIALS.contains(c)
}

fn is_dot_atom(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn is_quoted_string(s: &str) -> bool {
    let inner = match s.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner,
        None => return false,
    };
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return false;
                }
            }
            '"' => return false,
            c if c.is_control() => return false,
            _ => {}
        }
    }
    true
}

fn is_domain_literal(s: &str) -> bool {
    match s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => inner
            .chars()
            .all(|c| c.is_ascii_graphic() && !matches!(c, '[' | ']' | '\\')),
        None => false,
    }
}

fn is_display_name(name: &str) -> bool {
    if name.is_empty() {
        return true;
    }
    if name.starts_with('"') {
        return is_quoted_string(name);
    }
    name.chars()
        .all(|c| c == ' ' || c == '.' || is_atext(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_addresses() {
        for addr in [
            "dev@example.com",
            "first.last@sub.example.co.uk",
            "user+tag@example.com",
            "o'brien@example.ie",
            "root@localhost",
            "x@[192.168.0.1]",
        ] {
            assert_eq!(parse_address(addr).as_deref(), Some(addr), "{}", addr);
        }
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            parse_address("  dev@example.com \n").as_deref(),
            Some("dev@example.com")
        );
    }

    #[test]
    fn test_name_addr_normalized() {
        assert_eq!(
            parse_address("Ada Lovelace <ada@example.com>").as_deref(),
            Some("ada@example.com")
        );
        assert_eq!(
            parse_address("\"Lovelace, Ada\" <ada@example.com>").as_deref(),
            Some("ada@example.com")
        );
        assert_eq!(parse_address("<ada@example.com>").as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_quoted_local_part() {
        assert_eq!(
            parse_address("\"john doe\"@example.com").as_deref(),
            Some("\"john doe\"@example.com")
        );
    }

    #[test]
    fn test_malformed_rejected() {
        for addr in [
            "",
            "   ",
            "example.com",
            "@example.com",
            "dev@",
            "dev@@example.com",
            "dev@example..com",
            ".dev@example.com",
            "dev.@example.com",
            "dev name@example.com",
            "dev@exa mple.com",
            "Ada <ada@example.com",
            "Ada <ada@example.com> trailing",
            "dev@example.com>",
        ] {
            assert_eq!(parse_address(addr), None, "{:?}", addr);
        }
    }
}
