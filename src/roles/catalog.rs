//! The role catalog: definitions and the table-size escalation rule.
//!
//! The catalog is process-wide constant data, but it is injected into the
//! engine at construction rather than accessed as an ambient global.

use smallvec::SmallVec;

use super::definition::{RoleDefinition, RoleId};
use crate::core::CatalogError;

/// The active role set for one round, inline-allocated (max 8 roles).
pub type RoleSet = SmallVec<[RoleId; 8]>;

/// Catalog of the 8 role definitions.
///
/// ## Example
///
/// ```
/// use royal_court::roles::{RoleCatalog, RoleId, Language};
///
/// let catalog = RoleCatalog::standard();
/// let ruler = catalog.get(RoleId::Ruler);
/// assert_eq!(ruler.points, 2000);
/// assert_eq!(ruler.name(Language::English), "King");
/// ```
#[derive(Clone, Debug)]
pub struct RoleCatalog {
    defs: [RoleDefinition; 8],
}

impl RoleCatalog {
    /// Build the standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            defs: [
                RoleDefinition {
                    id: RoleId::Ruler,
                    name_hindi: "Raja",
                    name_english: "King",
                    points: 2000,
                    priority: 8,
                    description: "The Ruler. Reveals first. Always scores 2000.",
                    objective: "Protect your kingdom and ensure lawful order prevails",
                    abilities: &["First revelation", "Point security"],
                    icon: "Crown",
                },
                RoleDefinition {
                    id: RoleId::Consort,
                    name_hindi: "Rani",
                    name_english: "Queen",
                    points: 1800,
                    priority: 7,
                    description: "The High Royal. Supports the Ruler.",
                    objective: "Support the Ruler and maintain royal authority",
                    abilities: &["High point value", "Royal protection"],
                    icon: "Heart",
                },
                RoleDefinition {
                    id: RoleId::Minister,
                    name_hindi: "Mantri",
                    name_english: "Minister",
                    points: 1500,
                    priority: 6,
                    description: "The Advisor. Guides the court.",
                    objective: "Guide the court with wisdom and strategic counsel",
                    abilities: &["Moderate point value", "Advisory position"],
                    icon: "Scroll",
                },
                RoleDefinition {
                    id: RoleId::General,
                    name_hindi: "Senapati",
                    name_english: "General",
                    points: 1200,
                    priority: 5,
                    description: "The Commander. Protects the realm.",
                    objective: "Defend the royal court from internal threats",
                    abilities: &["Military authority", "Moderate protection"],
                    icon: "Sword",
                },
                RoleDefinition {
                    id: RoleId::Police,
                    name_hindi: "Prahari",
                    name_english: "Police",
                    points: 800,
                    priority: 4,
                    description: "The Investigator. Must find the Thief to score.",
                    objective: "Identify and accuse the Thief before they escape",
                    abilities: &["Investigation power", "Single accusation"],
                    icon: "Shield",
                },
                RoleDefinition {
                    id: RoleId::Courtesan,
                    name_hindi: "Nartak",
                    name_english: "Courtesan",
                    points: 400,
                    priority: 3,
                    description: "The Entertainer. Neutral observer.",
                    objective: "Navigate court politics while maintaining neutrality",
                    abilities: &["Low risk", "Neutral position"],
                    icon: "Music",
                },
                RoleDefinition {
                    id: RoleId::Citizen,
                    name_hindi: "Praja",
                    name_english: "Citizen",
                    points: 200,
                    priority: 2,
                    description: "The Citizen. Common folk.",
                    objective: "Survive the court intrigue with minimal losses",
                    abilities: &["Minimal risk", "Commoner perspective"],
                    icon: "User",
                },
                RoleDefinition {
                    id: RoleId::Thief,
                    name_hindi: "Chor",
                    name_english: "Thief",
                    points: 0,
                    priority: 1,
                    description: "The Criminal. Steals 800 points if the Police fails.",
                    objective: "Evade detection and undermine the investigation",
                    abilities: &["Deception", "Point reversal"],
                    icon: "Skull",
                },
            ],
        }
    }

    /// Look up a role definition. Total over the standard catalog.
    #[must_use]
    pub fn get(&self, id: RoleId) -> &RoleDefinition {
        // Catalog order matches RoleId::ALL, so position is the discriminant.
        let idx = RoleId::ALL.iter().position(|r| *r == id).unwrap_or(0);
        &self.defs[idx]
    }

    /// Point value for a role.
    #[must_use]
    pub fn points(&self, id: RoleId) -> u32 {
        self.get(id).points
    }

    /// Iterate over all definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.defs.iter()
    }

    /// The role set for a table of `count` players.
    ///
    /// Base set `{Ruler, Police, Thief, Consort}` at 4 players, then one
    /// role per additional seat in fixed order: Minister at 5, General at
    /// 6, Courtesan at 7, Citizen at 8. This escalation table is a design
    /// constant.
    ///
    /// Validated setup never passes an out-of-range count, but the
    /// contract stays total.
    pub fn roles_for_count(&self, count: usize) -> Result<RoleSet, CatalogError> {
        if !(4..=8).contains(&count) {
            return Err(CatalogError(count));
        }

        let mut roles: RoleSet =
            SmallVec::from_slice(&[RoleId::Ruler, RoleId::Police, RoleId::Thief, RoleId::Consort]);
        let escalation = [
            RoleId::Minister,
            RoleId::General,
            RoleId::Courtesan,
            RoleId::Citizen,
        ];
        roles.extend(escalation.into_iter().take(count - 4));

        Ok(roles)
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
