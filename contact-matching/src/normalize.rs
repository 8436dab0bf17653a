//! Identifier normalization used when comparing contact methods.
//!
//! There are two phone normalizers on purpose. Import matching uses the loose
//! form, which never invents a country code, so `555-1234` and `+1-555-1234`
//! stay different. Identity lookups use the stricter E.164 form.

/// Lowercase and trim an email address. Tags and dots are left alone.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Strip everything except ASCII digits, keeping a leading `+` only when the
/// raw value starts with one.
pub fn normalize_phone_loose(phone: &str) -> String {
    let mut normalized = String::with_capacity(phone.len());
    if phone.starts_with('+') {
        normalized.push('+');
    }
    normalized.extend(phone.chars().filter(|c| c.is_ascii_digit()));
    normalized
}

/// Normalize a phone number to E.164.
///
/// Bare 10 digit numbers are assumed to be North American and get `+1`.
/// Everything else (11 digits with a leading `1`, numbers that already had a
/// `+`, other lengths) is prefixed with `+` as is.
pub fn normalize_phone_e164(phone: &str) -> String {
    let phone = phone.trim();
    let has_plus = phone.starts_with('+');

    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }

    if digits.len() == 10 && !has_plus {
        return format!("+1{}", digits);
    }

    format!("+{}", digits)
}
