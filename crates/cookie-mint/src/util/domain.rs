use url::Url;

const SCHEME_PREFIXES: &[&str] = &["https://", "http://"];

/// Practical ceiling for a DNS name.
const MAX_DOMAIN_CHARS: usize = 253;

/// Shortest plausible name, e.g. `a.b`.
const MIN_DOMAIN_CHARS: usize = 3;

/// Normalizes a caller-supplied domain string into a canonical cookie-domain
/// attribute value, or `None` when the input is not acceptable.
///
/// The canonical form carries a single leading dot (`.example.com`), meaning
/// "this host and all subdomains". A leading `http://` or `https://` is
/// stripped case-insensitively before validation, so pasting an origin
/// instead of a hostname still works. Already-canonical input is returned
/// unchanged.
pub fn normalize_domain(input: &str) -> Option<String> {
    let length = input.chars().count();
    if !(MIN_DOMAIN_CHARS..=MAX_DOMAIN_CHARS).contains(&length) {
        return None;
    }

    // A domain ending in a dot is never a valid cookie domain. This also
    // covers inputs that are nothing but dots.
    if input.ends_with('.') {
        return None;
    }

    let domain = strip_scheme(input);
    if !is_valid_host(domain) {
        return None;
    }

    if domain.starts_with('.') {
        Some(domain.to_string())
    } else {
        Some(format!(".{domain}"))
    }
}

/// Removes exactly one leading scheme prefix, matched case-insensitively.
/// Only the literal matched prefix is removed, never a character class.
fn strip_scheme(input: &str) -> &str {
    for scheme in SCHEME_PREFIXES {
        if let Some(prefix) = input.get(..scheme.len()) {
            if prefix.eq_ignore_ascii_case(scheme) {
                return &input[scheme.len()..];
            }
        }
    }
    input
}

/// Checks that `domain` is a bare host and nothing else, by reconstructing
/// `http://{domain}` and parsing it with the `url` crate, then tightening
/// with DNS label rules the URL grammar alone does not enforce.
fn is_valid_host(domain: &str) -> bool {
    let url = match Url::parse(&format!("http://{domain}")) {
        Ok(url) => url,
        Err(_) => return false,
    };

    // Anything besides a host (userinfo, port, path, query, fragment) means
    // the input smuggled in URL syntax, e.g. a stray `@`.
    if !url.username().is_empty() || url.password().is_some() || url.port().is_some() {
        return false;
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return false;
    }

    // The parser must not have rewritten the host (percent-decoding, IDNA
    // mapping); only ASCII case folding is tolerated.
    match url.host_str() {
        Some(host) if host.eq_ignore_ascii_case(domain) => {}
        _ => return false,
    }

    labels_are_valid(domain)
}

/// Per-label DNS syntax: alphanumeric and hyphens, no leading or trailing
/// hyphen, at most 63 bytes. A single leading empty label is allowed so
/// already-canonical domains (`.example.com`) validate unchanged.
fn labels_are_valid(domain: &str) -> bool {
    let bare = domain.strip_prefix('.').unwrap_or(domain);
    if bare.is_empty() {
        return false;
    }
    bare.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_hostnames() {
        assert_eq!(
            normalize_domain("www.google.de").as_deref(),
            Some(".www.google.de")
        );
        assert_eq!(normalize_domain("google.de").as_deref(), Some(".google.de"));
        assert_eq!(
            normalize_domain("www.google").as_deref(),
            Some(".www.google")
        );
    }

    #[test]
    fn strips_scheme_before_prefixing() {
        assert_eq!(
            normalize_domain("https://google.com").as_deref(),
            Some(".google.com")
        );
        assert_eq!(
            normalize_domain("https://www.google.com").as_deref(),
            Some(".www.google.com")
        );
        assert_eq!(
            normalize_domain("http://example.com").as_deref(),
            Some(".example.com")
        );
    }

    #[test]
    fn scheme_matching_is_case_insensitive() {
        assert_eq!(
            normalize_domain("HTTPS://google.com").as_deref(),
            Some(".google.com")
        );
        assert_eq!(
            normalize_domain("Http://example.com").as_deref(),
            Some(".example.com")
        );
    }

    #[test]
    fn strips_only_the_literal_prefix() {
        // Must not behave like character-class trimming: the "s" of a host
        // starting with scheme characters has to survive.
        assert_eq!(
            normalize_domain("http://shop.example.com").as_deref(),
            Some(".shop.example.com")
        );
        assert_eq!(normalize_domain("pths.example.com").as_deref(), Some(".pths.example.com"));
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert_eq!(normalize_domain(""), None);
        assert_eq!(normalize_domain("ab"), None);
        assert_eq!(normalize_domain(&"a".repeat(254)), None);
    }

    #[test]
    fn accepts_length_boundaries() {
        assert_eq!(normalize_domain("a.b").as_deref(), Some(".a.b"));

        // Four labels of 63, 63, 63 and 61 characters: 253 total.
        let long = [
            "a".repeat(63),
            "b".repeat(63),
            "c".repeat(63),
            "d".repeat(61),
        ]
        .join(".");
        assert_eq!(long.len(), 253);
        assert_eq!(normalize_domain(&long), Some(format!(".{long}")));
    }

    #[test]
    fn rejects_trailing_dot() {
        assert_eq!(normalize_domain("www.test.de."), None);
        assert_eq!(normalize_domain("."), None);
        assert_eq!(normalize_domain(".."), None);
    }

    #[test]
    fn rejects_malformed_hosts() {
        assert_eq!(normalize_domain("-_-"), None);
        assert_eq!(normalize_domain("---"), None);
        assert_eq!(normalize_domain("domain-@test.@de"), None);
        assert_eq!(normalize_domain("a..b"), None);
        assert_eq!(normalize_domain("example.com:8080"), None);
        assert_eq!(normalize_domain("example.com/path"), None);
    }

    #[test]
    fn keeps_punycode_labels_unchanged() {
        assert_eq!(
            normalize_domain("xn--fsqu00a.xn--0zwm56d").as_deref(),
            Some(".xn--fsqu00a.xn--0zwm56d")
        );
    }

    #[test]
    fn canonical_input_is_a_fixed_point() {
        assert_eq!(
            normalize_domain(".example.com").as_deref(),
            Some(".example.com")
        );
        let once = normalize_domain("www.google.de").unwrap();
        assert_eq!(normalize_domain(&once), Some(once));
    }

    #[test]
    fn scheme_variants_agree_with_bare_input() {
        for host in ["example.com", "sub.example.org", "a.b"] {
            let bare = normalize_domain(host);
            assert_eq!(normalize_domain(&format!("http://{host}")), bare);
            assert_eq!(normalize_domain(&format!("https://{host}")), bare);
        }
    }

    #[test]
    fn preserves_host_case() {
        assert_eq!(
            normalize_domain("WWW.Google.DE").as_deref(),
            Some(".WWW.Google.DE")
        );
    }
}
