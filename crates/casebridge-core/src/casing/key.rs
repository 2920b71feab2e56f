//! Single-key case conversion.
//!
//! Only ASCII letters and digits take part in word boundaries; any other
//! character is copied through unchanged.

/// Convert a snake_case key to camelCase.
///
/// Each `_` followed by a lowercase ASCII letter or digit is dropped and the
/// following character upper-cased. Leading underscores are part of the name
/// (`_id`, `__typename`) and are kept.
pub fn camelize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while chars.next_if_eq(&'_').is_some() {
        out.push('_');
    }

    while let Some(ch) = chars.next() {
        if ch == '_' {
            if let Some(next) = chars.next_if(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
                out.push(next.to_ascii_uppercase());
                continue;
            }
        }
        out.push(ch);
    }
    out
}

/// Convert a camelCase (or PascalCase) key to snake_case.
///
/// With `no_underscore_before_number` a digit run stays attached to the
/// preceding word: `address1` instead of `address_1`.
pub fn underscoreize_key(key: &str, no_underscore_before_number: bool) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    let mut chars = key.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(p) = prev {
            if starts_word(p, ch, chars.peek().copied(), no_underscore_before_number) {
                out.push('_');
            }
        }
        out.push(ch.to_ascii_lowercase());
        prev = Some(ch);
    }
    out
}

fn starts_word(prev: char, ch: char, next: Option<char>, no_underscore_before_number: bool) -> bool {
    if ch.is_ascii_uppercase() {
        // `userName`, `key1Name`, and the `P` of `HTMLParser`
        prev.is_ascii_lowercase()
            || prev.is_ascii_digit()
            || (prev.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase()))
    } else if ch.is_ascii_digit() {
        !no_underscore_before_number && prev.is_ascii_alphabetic()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_simple() {
        assert_eq!(camelize_key("user_name"), "userName");
        assert_eq!(camelize_key("title_display"), "titleDisplay");
        assert_eq!(camelize_key("b_only_one_letter"), "bOnlyOneLetter");
        assert_eq!(camelize_key("a_b_c"), "aBC");
    }

    #[test]
    fn test_camelize_digits() {
        assert_eq!(camelize_key("key_10"), "key10");
        assert_eq!(camelize_key("address_1_line"), "address1Line");
    }

    #[test]
    fn test_camelize_keeps_leading_underscores() {
        assert_eq!(camelize_key("_id"), "_id");
        assert_eq!(camelize_key("__typename"), "__typename");
        assert_eq!(camelize_key("_private_field"), "_privateField");
    }

    #[test]
    fn test_camelize_leaves_other_underscores() {
        assert_eq!(camelize_key("trailing_"), "trailing_");
        assert_eq!(camelize_key("double__under"), "double_Under");
        assert_eq!(camelize_key("upper_Case"), "upper_Case");
        assert_eq!(camelize_key("already"), "already");
        assert_eq!(camelize_key(""), "");
    }

    #[test]
    fn test_underscoreize_simple() {
        assert_eq!(underscoreize_key("userName", false), "user_name");
        assert_eq!(underscoreize_key("bOnlyOneLetter", false), "b_only_one_letter");
        assert_eq!(underscoreize_key("UserName", false), "user_name");
        assert_eq!(underscoreize_key("user_name", false), "user_name");
    }

    #[test]
    fn test_underscoreize_acronyms() {
        assert_eq!(underscoreize_key("HTMLParser", false), "html_parser");
        assert_eq!(underscoreize_key("userID", false), "user_id");
        assert_eq!(underscoreize_key("getHTTPResponse", false), "get_http_response");
        assert_eq!(underscoreize_key("ID", false), "id");
    }

    #[test]
    fn test_underscoreize_numbers() {
        assert_eq!(underscoreize_key("key10", false), "key_10");
        assert_eq!(underscoreize_key("address1Line", false), "address_1_line");
        assert_eq!(underscoreize_key("key10", true), "key10");
        assert_eq!(underscoreize_key("address1Line", true), "address1_line");
    }

    #[test]
    fn test_round_trip_of_plain_words() {
        for key in ["user_name", "created_at", "address_1_line", "_id"] {
            assert_eq!(underscoreize_key(&camelize_key(key), false), key);
        }
    }
}
