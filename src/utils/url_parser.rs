/// Host part of an address for display: no scheme, credentials, port or path.
pub fn hostname_from_url(u: &str) -> String {
    let rest = match u.trim().split_once("://") {
        Some((_, rest)) => rest,
        None => u.trim(),
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    match host.strip_prefix('[') {
        // bracketed IPv6 literal
        Some(v6) => v6.split(']').next().unwrap_or_default().to_string(),
        None => host.split(':').next().unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_port_and_path() {
        assert_eq!(hostname_from_url("https://api.example.com/api"), "api.example.com");
        assert_eq!(hostname_from_url("http://localhost:8080"), "localhost");
        assert_eq!(hostname_from_url("  "), "");
        assert_eq!(hostname_from_url("example.org/x?y=1"), "example.org");
    }

    #[test]
    fn drops_credentials_and_handles_ipv6() {
        assert_eq!(hostname_from_url("http://admin:pw@10.0.0.5:8080/api"), "10.0.0.5");
        assert_eq!(hostname_from_url("http://[::1]:8080/api"), "::1");
    }
}
