//! Core types for the team dashboard.
//!
//! This crate defines the roster records shared by the member store,
//! the table view, and the frontend, along with the static figures the
//! dashboard charts render.

pub mod dashboard;
mod seed;

pub use seed::seed_members;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether a member is currently active on the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

impl MemberStatus {
    /// Label shown in status badges and select options.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(MemberStatus::Active),
            "inactive" => Ok(MemberStatus::Inactive),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

/// A row in the team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique member identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Initials shown in the avatar circle
    pub avatar: String,
    /// Active or inactive
    pub status: MemberStatus,
    /// Job title
    pub role: String,
    /// Contact address
    pub email: String,
    /// Team badges shown in the table, in display order
    pub teams: Vec<String>,
    /// Number of teams not shown as badges
    pub extra_teams: u32,
}

impl Member {
    /// Build a full record from create input, deriving the avatar from the name.
    pub fn from_new(id: String, input: NewMember) -> Self {
        let avatar = derive_avatar(&input.name);
        Self {
            id,
            name: input.name,
            avatar,
            status: input.status,
            role: input.role,
            email: input.email,
            teams: input.teams,
            extra_teams: input.extra_teams,
        }
    }
}

/// Errors raised while validating form input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("unknown status: {0}")]
    UnknownStatus(String),
}

/// Input collected by the add-member form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub status: MemberStatus,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub extra_teams: u32,
}

impl NewMember {
    /// Create input with the required fields and defaults for the rest.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            ..Self::default()
        }
    }

    /// Names of required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("role", &self.role),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check that every required field is filled in.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.missing_fields().first().copied() {
            Some(field) => Err(ValidationError::MissingField(field)),
            None => Ok(()),
        }
    }
}

impl From<&Member> for NewMember {
    /// Pre-fill the edit form from an existing record.
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.clone(),
            status: member.status,
            teams: member.teams.clone(),
            extra_teams: member.extra_teams,
        }
    }
}

/// Partial update merged into an existing member.
///
/// Only the fields that are `Some` are written; `id` and `avatar` are never
/// touched, so a rename keeps the initials assigned at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatch {
    pub name: Option<String>,
    pub status: Option<MemberStatus>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub teams: Option<Vec<String>>,
    pub extra_teams: Option<u32>,
}

impl MemberPatch {
    /// Patch that only changes the role.
    pub fn role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::default()
        }
    }

    /// True when the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.status.is_none()
            && self.role.is_none()
            && self.email.is_none()
            && self.teams.is_none()
            && self.extra_teams.is_none()
    }

    /// Merge the present fields into `member`.
    pub fn apply(&self, member: &mut Member) {
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(status) = self.status {
            member.status = status;
        }
        if let Some(role) = &self.role {
            member.role = role.clone();
        }
        if let Some(email) = &self.email {
            member.email = email.clone();
        }
        if let Some(teams) = &self.teams {
            member.teams = teams.clone();
        }
        if let Some(extra_teams) = self.extra_teams {
            member.extra_teams = extra_teams;
        }
    }
}

impl From<NewMember> for MemberPatch {
    /// The edit form submits the same fields as the add form.
    fn from(input: NewMember) -> Self {
        Self {
            name: Some(input.name),
            status: Some(input.status),
            role: Some(input.role),
            email: Some(input.email),
            teams: None,
            extra_teams: None,
        }
    }
}

/// Derive avatar initials from a display name.
///
/// One word gives its first letter; several words give the first letter of
/// the first and last word. Letters are upper-cased. A blank name yields an
/// empty string.
pub fn derive_avatar(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut avatar = initial(first);
    if let Some(last) = words.last() {
        avatar.push_str(&initial(last));
    }
    avatar
}

fn initial(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member() -> Member {
        Member::from_new(
            "1".to_string(),
            NewMember {
                teams: vec!["Design".to_string(), "Product".to_string()],
                extra_teams: 4,
                ..NewMember::new("Farouk Muhammed", "farouk@example.com", "Product Designer")
            },
        )
    }

    #[test]
    fn test_derive_avatar_two_words() {
        assert_eq!(derive_avatar("Farouk Muhammed"), "FM");
    }

    #[test]
    fn test_derive_avatar_uses_first_and_last_word() {
        assert_eq!(derive_avatar("mary ann de souza"), "MS");
    }

    #[test]
    fn test_derive_avatar_single_word() {
        assert_eq!(derive_avatar("cher"), "C");
    }

    #[test]
    fn test_derive_avatar_blank_and_padded() {
        assert_eq!(derive_avatar(""), "");
        assert_eq!(derive_avatar("   "), "");
        assert_eq!(derive_avatar("  ada   lovelace  "), "AL");
    }

    #[test]
    fn test_member_from_new() {
        let member = sample_member();

        assert_eq!(member.id, "1");
        assert_eq!(member.avatar, "FM");
        assert_eq!(member.status, MemberStatus::Active);
        assert_eq!(member.teams, vec!["Design", "Product"]);
        assert_eq!(member.extra_teams, 4);
    }

    #[test]
    fn test_member_serializes_camel_case() {
        let member = sample_member();

        let json = serde_json::to_value(&member).unwrap();

        assert_eq!(json["extraTeams"], 4);
        assert_eq!(json["status"], "Active");
        assert!(json.get("extra_teams").is_none());
    }

    #[test]
    fn test_member_parses_persisted_layout() {
        let json = r#"{
            "id": "7",
            "name": "Ngozi Adeyemi",
            "avatar": "NA",
            "status": "Inactive",
            "role": "Product Manager",
            "email": "ngozi@untitledui.com",
            "teams": ["Design", "Product", "Marketing"],
            "extraTeams": 4
        }"#;

        let member: Member = serde_json::from_str(json).unwrap();

        assert_eq!(member.status, MemberStatus::Inactive);
        assert_eq!(member.teams.len(), 3);
    }

    #[test]
    fn test_new_member_validation() {
        assert!(NewMember::new("A", "a@b.c", "Dev").validate().is_ok());

        let input = NewMember::new("  ", "a@b.c", "");
        assert_eq!(input.missing_fields(), vec!["name", "role"]);
        assert_eq!(input.validate(), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn test_patch_changes_only_present_fields() {
        let mut member = sample_member();
        let before = member.clone();

        MemberPatch::role("Engineer").apply(&mut member);

        assert_eq!(member.role, "Engineer");
        assert_eq!(member.name, before.name);
        assert_eq!(member.email, before.email);
        assert_eq!(member.teams, before.teams);
        assert_eq!(member.extra_teams, before.extra_teams);
    }

    #[test]
    fn test_patch_rename_keeps_avatar() {
        let mut member = sample_member();

        MemberPatch {
            name: Some("Saliu Hammed".to_string()),
            ..MemberPatch::default()
        }
        .apply(&mut member);

        assert_eq!(member.name, "Saliu Hammed");
        assert_eq!(member.avatar, "FM");
    }

    #[test]
    fn test_patch_from_form_input() {
        let patch = MemberPatch::from(NewMember::new("A B", "ab@c.d", "QA"));

        assert_eq!(patch.name.as_deref(), Some("A B"));
        assert_eq!(patch.status, Some(MemberStatus::Active));
        assert!(patch.teams.is_none());
        assert!(!patch.is_empty());
        assert!(MemberPatch::default().is_empty());
    }

    #[test]
    fn test_edit_form_prefill() {
        let member = sample_member();

        let input = NewMember::from(&member);

        assert_eq!(input.name, member.name);
        assert_eq!(input.extra_teams, 4);
        assert_eq!(Member::from_new(member.id.clone(), input), member);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Active".parse::<MemberStatus>(), Ok(MemberStatus::Active));
        assert_eq!("inactive".parse::<MemberStatus>(), Ok(MemberStatus::Inactive));
        assert!("away".parse::<MemberStatus>().is_err());
    }
}
