use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Kinds of contact methods stored on a CRM contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethodType {
    EmailPersonal,
    EmailWork,
    Phone,
    Telegram,
    Discord,
    Twitter,
    Signal,
    Gchat,
    Whatsapp,
}

impl ContactMethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethodType::EmailPersonal => "email_personal",
            ContactMethodType::EmailWork => "email_work",
            ContactMethodType::Phone => "phone",
            ContactMethodType::Telegram => "telegram",
            ContactMethodType::Discord => "discord",
            ContactMethodType::Twitter => "twitter",
            ContactMethodType::Signal => "signal",
            ContactMethodType::Gchat => "gchat",
            ContactMethodType::Whatsapp => "whatsapp",
        }
    }

    pub fn is_email(&self) -> bool {
        matches!(
            self,
            ContactMethodType::EmailPersonal | ContactMethodType::EmailWork
        )
    }

    /// Only emails and phones take part in method overlap scoring
    pub fn is_matchable(&self) -> bool {
        self.is_email() || *self == ContactMethodType::Phone
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactMethod {
    #[serde(rename = "type")]
    pub method_type: ContactMethodType,
    pub value: String,
}

impl ContactMethod {
    pub fn new(method_type: ContactMethodType, value: impl Into<String>) -> Self {
        Self {
            method_type,
            value: value.into(),
        }
    }
}

/// The slice of a stored CRM contact that matching needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExistingContactSummary {
    pub id: Uuid,
    pub full_name: String,
    #[serde(default)]
    pub methods: Vec<ContactMethod>,
}
