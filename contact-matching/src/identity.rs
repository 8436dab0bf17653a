//! Normalization and lookup helpers for external identifiers (email addresses,
//! phone numbers, messenger handles) seen by sync sources.

use serde::{Deserialize, Serialize};
use shared_types::ContactMethodType;

use crate::normalize::{normalize_email, normalize_phone_e164};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierType {
    Email,
    Phone,
    Telegram,
    ImessageEmail,
    ImessagePhone,
    Whatsapp,
}

/// Normalize a raw identifier according to its type.
///
/// Phones go through the strict E.164 normalizer here, unlike import matching.
pub fn normalize_identifier(raw: &str, id_type: IdentifierType) -> String {
    match id_type {
        IdentifierType::Email | IdentifierType::ImessageEmail => normalize_email(raw),
        IdentifierType::Phone | IdentifierType::ImessagePhone | IdentifierType::Whatsapp => {
            normalize_phone_e164(raw)
        }
        IdentifierType::Telegram => normalize_telegram(raw),
    }
}

fn normalize_telegram(handle: &str) -> String {
    let handle = handle.trim();
    handle.strip_prefix('@').unwrap_or(handle).to_lowercase()
}

/// Contact method types an identifier of `id_type` should be looked up against
pub fn contact_method_types_for(id_type: IdentifierType) -> &'static [ContactMethodType] {
    match id_type {
        IdentifierType::Email | IdentifierType::ImessageEmail => &[
            ContactMethodType::EmailPersonal,
            ContactMethodType::EmailWork,
        ],
        IdentifierType::Phone | IdentifierType::ImessagePhone => &[ContactMethodType::Phone],
        IdentifierType::Telegram => &[ContactMethodType::Telegram],
        IdentifierType::Whatsapp => &[ContactMethodType::Whatsapp, ContactMethodType::Phone],
    }
}

/// Guess whether an identifier is an email or a phone number.
///
/// iMessage handles can be either. Anything that is not clearly a phone
/// number is treated as an email.
pub fn detect_identifier_type(identifier: &str) -> IdentifierType {
    let identifier = identifier.trim();

    if identifier.contains('@') {
        return IdentifierType::Email;
    }

    if identifier.starts_with('+') {
        return IdentifierType::Phone;
    }

    let digit_count = identifier.chars().filter(|c| c.is_ascii_digit()).count();
    if digit_count >= 7 && digit_count as f64 / identifier.len() as f64 > 0.5 {
        return IdentifierType::Phone;
    }

    IdentifierType::Email
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_identifiers() {
        assert_eq!(
            normalize_identifier("John.Doe@Example.COM", IdentifierType::Email),
            "john.doe@example.com"
        );
        assert_eq!(
            normalize_identifier("John@iCloud.COM", IdentifierType::ImessageEmail),
            "john@icloud.com"
        );
    }

    #[test]
    fn test_phone_identifiers_use_e164() {
        assert_eq!(
            normalize_identifier("555 123 4567", IdentifierType::Phone),
            "+15551234567"
        );
        assert_eq!(
            normalize_identifier("+1 (555) 123-4567", IdentifierType::ImessagePhone),
            "+15551234567"
        );
        assert_eq!(
            normalize_identifier("+1 555 123 4567", IdentifierType::Whatsapp),
            "+15551234567"
        );
    }

    #[test]
    fn test_normalize_telegram() {
        let cases = [
            ("@JohnDoe", "johndoe"),
            ("JohnDoe", "johndoe"),
            ("  @johndoe  ", "johndoe"),
            ("@John123", "john123"),
            ("", ""),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_identifier(input, IdentifierType::Telegram), expected);
        }
    }

    #[test]
    fn test_contact_method_types_for() {
        assert_eq!(
            contact_method_types_for(IdentifierType::Email),
            &[ContactMethodType::EmailPersonal, ContactMethodType::EmailWork]
        );
        assert_eq!(
            contact_method_types_for(IdentifierType::ImessageEmail),
            &[ContactMethodType::EmailPersonal, ContactMethodType::EmailWork]
        );
        assert_eq!(
            contact_method_types_for(IdentifierType::Phone),
            &[ContactMethodType::Phone]
        );
        assert_eq!(
            contact_method_types_for(IdentifierType::Telegram),
            &[ContactMethodType::Telegram]
        );
        assert_eq!(
            contact_method_types_for(IdentifierType::Whatsapp),
            &[ContactMethodType::Whatsapp, ContactMethodType::Phone]
        );
    }

    #[test]
    fn test_detect_identifier_type() {
        let cases = [
            ("john@example.com", IdentifierType::Email),
            ("+15551234567", IdentifierType::Phone),
            ("555-123-4567", IdentifierType::Phone),
            ("5551234567", IdentifierType::Phone),
            ("johndoe", IdentifierType::Email),
            ("12345", IdentifierType::Email),
        ];

        for (input, expected) in cases {
            assert_eq!(detect_identifier_type(input), expected, "input: {:?}", input);
        }
    }
}
