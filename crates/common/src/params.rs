//! Query parameters, the upstream credential, and the deny-list step that
//! keeps the two apart.
//!
//! Everything here is pure: no I/O, no HTTP client. The gateway calls
//! [`upstream_url`] to build the outbound request and [`redact`] before any
//! URL or error text derived from it reaches a log line or response body.

use std::fmt;

use url::Url;

use crate::constants::{CREDENTIAL_PARAM, REDACTED_KEY};

// ── QueryParams ─────────────────────────────────────────────────────

/// Ordered `(name, value)` pairs, duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw `a=1&b=2` query string (no leading `?`).
    pub fn from_query_str(raw: &str) -> Self {
        url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect()
    }

    /// Append a pair verbatim, empty value included.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((name.into(), value.into()));
        self
    }

    /// Append a pair only when the value is present and non-empty.
    pub fn push_opt<V: Into<String>>(&mut self, name: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            let v = v.into();
            if !v.is_empty() {
                self.pairs.push((name.into(), v));
            }
        }
        self
    }

    /// Builder-style [`push_opt`](Self::push_opt).
    pub fn with<V: Into<String>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.push_opt(name, value);
        self
    }

    /// First value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Pairs with a non-empty value. This is what a client puts on the wire.
    pub fn non_empty(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, v)| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

// ── ApiKey ──────────────────────────────────────────────────────────

/// The upstream credential. Never printed: `Debug` and `Display` both
/// render the redaction placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key. Blank input means "not configured".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw secret. Only the outbound query builder should need this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({REDACTED_KEY})")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED_KEY)
    }
}

// ── Outbound construction ───────────────────────────────────────────

/// Whether a (decoded) parameter name would carry the credential upstream:
/// `key` itself or any bracketed form such as `key[]` or `key[0]`.
pub fn is_credential_name(name: &str) -> bool {
    match name.strip_prefix(CREDENTIAL_PARAM) {
        Some(rest) => rest.is_empty() || rest.starts_with('['),
        None => false,
    }
}

/// Build the upstream query: the credential first, then every caller pair
/// that is not a credential name, in caller order and verbatim.
///
/// A caller-supplied `key` is dropped silently.
pub fn build_upstream_query(key: &ApiKey, caller: &QueryParams) -> QueryParams {
    let mut out = QueryParams::new();
    out.push(CREDENTIAL_PARAM, key.expose());
    for (name, value) in caller.iter().filter(|(n, _)| !is_credential_name(n)) {
        out.push(name, value);
    }
    out
}

/// `<base>/<resource>?key=…&<caller pairs>`.
pub fn upstream_url(
    base: &str,
    resource: &str,
    key: &ApiKey,
    caller: &QueryParams,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!(
        "{}/{}",
        base.trim_end_matches('/'),
        resource.trim_start_matches('/')
    ))?;
    let query = build_upstream_query(key, caller);
    url.query_pairs_mut().extend_pairs(query.iter());
    Ok(url)
}

/// Replace every occurrence of the credential in `text`, raw or
/// form-urlencoded, with `[API_KEY]`.
pub fn redact(text: &str, key: &ApiKey) -> String {
    let raw = key.expose();
    let mut out = text.replace(raw, REDACTED_KEY);
    let encoded: String = url::form_urlencoded::byte_serialize(raw.as_bytes()).collect();
    if encoded != raw {
        out = out.replace(&encoded, REDACTED_KEY);
    }
    out
}
