use std::fmt;

/// Every field extracted from a quest page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Type,
    Client,
    Place,
    Coordinates,
    Conditions,
    Rewards,
    SelectableRewards,
    PrerequisiteQuests,
    UnlockQuests,
}

/// How the assembler treats a field whose node is absent.
///
/// Malformed values abort assembly under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Absence aborts assembly.
    Mandatory,
    /// Absence yields the zero value of the field.
    Optional,
}

impl Field {
    pub const fn policy(self) -> Policy {
        match self {
            Field::Name => Policy::Mandatory,
            Field::Type
            | Field::Client
            | Field::Place
            | Field::Coordinates
            | Field::Conditions
            | Field::Rewards
            | Field::SelectableRewards
            | Field::PrerequisiteQuests
            | Field::UnlockQuests => Policy::Optional,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Type => "type",
            Field::Client => "client",
            Field::Place => "place",
            Field::Coordinates => "coordinates",
            Field::Conditions => "conditions",
            Field::Rewards => "rewards",
            Field::SelectableRewards => "selectable rewards",
            Field::PrerequisiteQuests => "prerequisite quests",
            Field::UnlockQuests => "unlock quests",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
