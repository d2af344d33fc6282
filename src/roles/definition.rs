//! Role identities and their catalog definitions.

use serde::{Deserialize, Serialize};

/// The 8 fixed role identities.
///
/// `Ruler`, `Police` and `Thief` are the three distinguished roles whose
/// holders drive the reveal and accusation sequence each round. The rest
/// are bystanders who score their catalog value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleId {
    Ruler,
    Consort,
    Minister,
    General,
    Police,
    Courtesan,
    Citizen,
    Thief,
}

impl RoleId {
    /// All role identities in catalog order.
    pub const ALL: [RoleId; 8] = [
        RoleId::Ruler,
        RoleId::Consort,
        RoleId::Minister,
        RoleId::General,
        RoleId::Police,
        RoleId::Courtesan,
        RoleId::Citizen,
        RoleId::Thief,
    ];
}

/// Display language for role names and status messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    #[default]
    Hindi,
    English,
}

/// A catalog entry: one role's immutable definition.
///
/// Point value and the distinguished-role identities drive gameplay;
/// `priority` orders reveal displays and everything else is presentation
/// payload for the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleDefinition {
    pub id: RoleId,
    /// Display name in Hindi.
    pub name_hindi: &'static str,
    /// Display name in English.
    pub name_english: &'static str,
    /// Points scored by holding this role (Police and Thief override this
    /// depending on the accusation outcome).
    pub points: u32,
    /// Display ordering for reveals, highest first. Not used by gameplay.
    pub priority: u8,
    /// Short flavor description.
    pub description: &'static str,
    /// The holder's objective for the round.
    pub objective: &'static str,
    /// Ability blurbs shown on the card.
    pub abilities: &'static [&'static str],
    /// Icon name consumed by the rendering layer.
    pub icon: &'static str,
}

impl RoleDefinition {
    /// Display name in the given language.
    #[must_use]
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Hindi => self.name_hindi,
            Language::English => self.name_english,
        }
    }
}
