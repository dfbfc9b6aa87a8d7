//! Link-Format string tokenizer.

use std::collections::BTreeMap;

use super::error::LinkDecodeError;

/// Attribute keys retained by the tokenizer; every other key is dropped.
pub const LINK_ATTRS: &[&str] = &["pmin", "pmax", "gt", "lt", "st"];

/// A decoded Link-Format discovery entry.
///
/// `attrs` and `resrc_list` are `None` — not `Some(empty)` — when the
/// source string carries no surviving attributes or no child links.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkEntry {
    /// Base path of the first link token.
    pub path: String,
    /// Filtered notification attributes, numerically coerced.
    pub attrs: Option<BTreeMap<String, f64>>,
    /// Child resource paths in source order.
    pub resrc_list: Option<Vec<String>>,
}

/// Decodes a Link-Format string into a [`LinkEntry`].
///
/// The first comma-separated token carries the base path and its
/// `key=value` attributes; every following token is a child resource
/// link. Attribute keys outside `allowed_attrs` and attribute values
/// that do not parse as numbers are dropped silently.
///
/// # Errors
///
/// Returns [`LinkDecodeError::MissingPath`] when the first token yields
/// an empty base path.
///
/// # Example
///
/// ```
/// use lwm2m_decode::link::{decode_link, LINK_ATTRS};
///
/// let entry = decode_link("</1/2>;pmin=10;pmax=60,</1/2/1>", LINK_ATTRS).unwrap();
/// assert_eq!(entry.path, "/1/2");
/// assert_eq!(entry.attrs.unwrap()["pmin"], 10.0);
/// assert_eq!(entry.resrc_list.unwrap(), vec!["/1/2/1"]);
/// ```
pub fn decode_link(value: &str, allowed_attrs: &[&str]) -> Result<LinkEntry, LinkDecodeError> {
    let mut tokens = value.split(',');
    // split always yields at least one token
    let base = tokens.next().unwrap_or("");

    let mut base_segments = base.split(';');
    let path = strip_brackets(base_segments.next().unwrap_or(""));
    if path.is_empty() {
        return Err(LinkDecodeError::MissingPath);
    }

    let mut attrs = BTreeMap::new();
    for pair in base_segments {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next().unwrap_or("");
        if !allowed_attrs.contains(&key) {
            continue;
        }
        if let Some(num) = kv.next().and_then(|v| v.parse::<f64>().ok()) {
            attrs.insert(key.to_string(), num);
        }
    }

    let resrc_list: Vec<String> = tokens
        .map(|token| strip_brackets(token).to_string())
        .collect();

    Ok(LinkEntry {
        path: path.to_string(),
        attrs: (!attrs.is_empty()).then_some(attrs),
        resrc_list: (!resrc_list.is_empty()).then_some(resrc_list),
    })
}

/// Strips the enclosing `<`/`>` positionally: the first and last byte go
/// regardless of what they are. A token missing its delimiters therefore
/// comes out truncated — a known leniency gap, not validated here.
fn strip_brackets(token: &str) -> &str {
    if token.len() < 2 {
        return "";
    }
    token.get(1..token.len() - 1).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_entry() {
        let entry = decode_link("</1/2>;pmin=10;pmax=60,</1/2/1>,</1/2/2>", LINK_ATTRS).unwrap();
        assert_eq!(entry.path, "/1/2");

        let attrs = entry.attrs.unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["pmin"], 10.0);
        assert_eq!(attrs["pmax"], 60.0);

        assert_eq!(entry.resrc_list.unwrap(), vec!["/1/2/1", "/1/2/2"]);
    }

    #[test]
    fn test_decode_path_only() {
        let entry = decode_link("</3/0>", LINK_ATTRS).unwrap();
        assert_eq!(entry.path, "/3/0");
        assert!(entry.attrs.is_none());
        assert!(entry.resrc_list.is_none());
    }

    #[test]
    fn test_attr_filtering_drops_unknown_keys() {
        let entry = decode_link("</a>;pmin=5;bogus=7", LINK_ATTRS).unwrap();
        let attrs = entry.attrs.unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["pmin"], 5.0);
    }

    #[test]
    fn test_attr_values_coerce_to_numbers() {
        let entry = decode_link("</a>;gt=20.5;lt=-3", LINK_ATTRS).unwrap();
        let attrs = entry.attrs.unwrap();
        assert_eq!(attrs["gt"], 20.5);
        assert_eq!(attrs["lt"], -3.0);
    }

    #[test]
    fn test_unparsable_attr_values_are_dropped() {
        // "st=fast" is an allowed key with a non-numeric value
        let entry = decode_link("</a>;st=fast;pmin=1", LINK_ATTRS).unwrap();
        let attrs = entry.attrs.unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["pmin"], 1.0);
    }

    #[test]
    fn test_attrs_omitted_when_nothing_survives() {
        let entry = decode_link("</a>;bogus=7", LINK_ATTRS).unwrap();
        assert!(entry.attrs.is_none());
    }

    #[test]
    fn test_missing_base_path_is_an_error() {
        assert_eq!(decode_link("", LINK_ATTRS), Err(LinkDecodeError::MissingPath));
        assert_eq!(
            decode_link(",</1/2>", LINK_ATTRS),
            Err(LinkDecodeError::MissingPath)
        );
        assert_eq!(
            decode_link("<>;pmin=1", LINK_ATTRS),
            Err(LinkDecodeError::MissingPath)
        );
    }

    #[test]
    fn test_missing_delimiters_truncate_positionally() {
        // No angle brackets: the first and last character are still cut
        let entry = decode_link("/1/2x", LINK_ATTRS).unwrap();
        assert_eq!(entry.path, "1/2");

        let entry = decode_link("</1>,abc", LINK_ATTRS).unwrap();
        assert_eq!(entry.resrc_list.unwrap(), vec!["b"]);
    }

    #[test]
    fn test_child_order_preserved() {
        let entry = decode_link("</1>,</1/9>,</1/1>,</1/5>", LINK_ATTRS).unwrap();
        assert_eq!(entry.resrc_list.unwrap(), vec!["/1/9", "/1/1", "/1/5"]);
    }

    #[test]
    fn test_injected_attr_set() {
        // A caller-supplied allowed set replaces the default
        let entry = decode_link("</a>;pmin=5;dim=2", &["dim"]).unwrap();
        let attrs = entry.attrs.unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["dim"], 2.0);
    }
}
