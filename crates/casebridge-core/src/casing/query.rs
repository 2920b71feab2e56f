//! Query-string key normalization.

use url::form_urlencoded;

use super::key::underscoreize_key;
use super::CaseOptions;

/// Underscoreize the keys of an `application/x-www-form-urlencoded` query.
///
/// Pair order and repeated keys are preserved, values are never touched.
/// Returns `None` when no key changes so callers can keep the original bytes.
pub fn underscoreize_query(query: &str, options: &CaseOptions) -> Option<String> {
    let mut changed = false;

    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| {
            let new_key = if options.ignore_keys.contains(&*key) {
                key.into_owned()
            } else {
                let renamed = underscoreize_key(&key, options.no_underscore_before_number);
                changed |= renamed != key;
                renamed
            };
            (new_key, value.into_owned())
        })
        .collect();

    if !changed {
        return None;
    }

    Some(form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish())
}
