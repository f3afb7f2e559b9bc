use crate::error::{GoalFlowError, Result};
use crate::types::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The creating user. Stays fixed even if ownership roles change later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "team_members", default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<TeamMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Team {
    /// Create a team with its creator seeded as the owner.
    pub fn new(name: impl Into<String>, owner_user_id: impl Into<String>) -> Self {
        let owner_user_id = owner_user_id.into();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            owner_id: Some(owner_user_id.clone()),
            members: vec![TeamMember {
                user_id: owner_user_id,
                display_name: None,
                role: Role::Owner,
                joined_at: Some(now),
            }],
            created_at: Some(now),
        }
    }

    pub fn member(&self, user_id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    pub fn add_member(&mut self, user_id: impl Into<String>, role: Role) -> Result<()> {
        let user_id = user_id.into();
        if self.member(&user_id).is_some() {
            return Err(GoalFlowError::DuplicateMember(user_id));
        }
        self.members.push(TeamMember {
            user_id,
            display_name: None,
            role,
            joined_at: Some(Utc::now()),
        });
        Ok(())
    }

    pub fn remove_member(&mut self, user_id: &str) -> Result<TeamMember> {
        let idx = self
            .members
            .iter()
            .position(|m| m.user_id == user_id)
            .ok_or_else(|| GoalFlowError::MemberNotFound(user_id.to_string()))?;
        if self.members[idx].role == Role::Owner && self.owner_count() == 1 {
            return Err(GoalFlowError::LastOwner(self.name.clone()));
        }
        Ok(self.members.remove(idx))
    }

    pub fn set_role(&mut self, user_id: &str, role: Role) -> Result<()> {
        if role != Role::Owner
            && self.owner_count() == 1
            && self.member(user_id).is_some_and(|m| m.role == Role::Owner)
        {
            return Err(GoalFlowError::LastOwner(self.name.clone()));
        }
        let member = self
            .members
            .iter_mut()
            .find(|m| m.user_id == user_id)
            .ok_or_else(|| GoalFlowError::MemberNotFound(user_id.to_string()))?;
        member.role = role;
        Ok(())
    }

    fn owner_count(&self) -> usize {
        self.members.iter().filter(|m| m.role == Role::Owner).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_is_owner() {
        let team = Team::new("Platform", "u-1");
        assert_eq!(team.owner_id.as_deref(), Some("u-1"));
        assert_eq!(team.member("u-1").unwrap().role, Role::Owner);
    }

    #[test]
    fn members_serialize_under_wire_key() {
        let team = Team::new("Platform", "u-1");
        let json = serde_json::to_value(&team).unwrap();
        assert!(json.get("team_members").is_some());
        assert!(json.get("members").is_none());
    }

    #[test]
    fn duplicate_member_rejected() {
        let mut team = Team::new("Platform", "u-1");
        team.add_member("u-2", Role::Member).unwrap();
        assert!(matches!(
            team.add_member("u-2", Role::Member),
            Err(GoalFlowError::DuplicateMember(_))
        ));
    }

    #[test]
    fn last_owner_protected() {
        let mut team = Team::new("Platform", "u-1");
        team.add_member("u-2", Role::Member).unwrap();

        assert!(matches!(
            team.remove_member("u-1"),
            Err(GoalFlowError::LastOwner(_))
        ));
        assert!(matches!(
            team.set_role("u-1", Role::Member),
            Err(GoalFlowError::LastOwner(_))
        ));

        // A second owner frees the first to step down.
        team.set_role("u-2", Role::Owner).unwrap();
        team.set_role("u-1", Role::Member).unwrap();
        assert_eq!(team.member("u-1").unwrap().role, Role::Member);
    }

    #[test]
    fn remove_member_returns_entry() {
        let mut team = Team::new("Platform", "u-1");
        team.add_member("u-2", Role::Member).unwrap();
        let removed = team.remove_member("u-2").unwrap();
        assert_eq!(removed.user_id, "u-2");
        assert!(team.member("u-2").is_none());
        assert!(matches!(
            team.remove_member("u-2"),
            Err(GoalFlowError::MemberNotFound(_))
        ));
    }
}
