use serde::{Deserialize, Serialize};

use crate::{MemberSearchCondition, MemberTeam};

/// A single restriction on a member search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    UsernameEq(String),
    TeamNameEq(String),
    AgeGoe(i32),
    AgeLoe(i32),
}

impl Predicate {
    /// True if the predicate reads a column of the team
    pub fn references_team(&self) -> bool {
        matches!(self, Predicate::TeamNameEq(_))
    }

    /// Evaluate the predicate for a single row.
    /// A missing value never equals anything.
    pub fn matches(&self, row: &MemberTeam) -> bool {
        match self {
            Predicate::UsernameEq(username) => row.username.as_deref() == Some(username.as_str()),
            Predicate::TeamNameEq(name) => row.team_name.as_deref() == Some(name.as_str()),
            Predicate::AgeGoe(age) => row.age >= *age,
            Predicate::AgeLoe(age) => row.age <= *age,
        }
    }
}

/// Conjunction of predicates. An empty conjunction matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicates(Vec<Predicate>);

impl Predicates {
    /// Build the conjunction of all present criteria of the condition
    pub fn compose(condition: &MemberSearchCondition) -> Self {
        let predicates = [
            has_text(&condition.username).map(|u| Predicate::UsernameEq(u.to_string())),
            has_text(&condition.team_name).map(|t| Predicate::TeamNameEq(t.to_string())),
            condition.age_goe.map(Predicate::AgeGoe),
            condition.age_loe.map(Predicate::AgeLoe),
        ];
        Self(predicates.into_iter().flatten().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if any predicate needs the team joined in
    pub fn references_team(&self) -> bool {
        self.0.iter().any(Predicate::references_team)
    }

    pub fn matches(&self, row: &MemberTeam) -> bool {
        self.0.iter().all(|p| p.matches(row))
    }
}

/// A string is only a criterion if it contains something
/// other than whitespace.
fn has_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
