use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Title {
    Mr,
    Mrs,
    Ms,
    Dr,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Lead traveler details collected on the wizard's third step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelerDetails {
    pub title: Title,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub phone: String,
    pub gender: Option<Gender>,
}

impl Default for TravelerDetails {
    fn default() -> Self {
        Self {
            title: Title::Mr,
            first_name: String::new(),
            last_name: String::new(),
            date_of_birth: None,
            email: String::new(),
            phone: String::new(),
            gender: None,
        }
    }
}

/// Traveler fields required before booking submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelerField {
    FirstName,
    LastName,
    DateOfBirth,
    Email,
    Phone,
}

impl std::fmt::Display for TravelerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TravelerField::FirstName => "first name",
            TravelerField::LastName => "last name",
            TravelerField::DateOfBirth => "date of birth",
            TravelerField::Email => "email",
            TravelerField::Phone => "phone",
        };
        f.write_str(name)
    }
}

impl TravelerDetails {
    /// List the fields still blank. Title always carries a default and gender
    /// is optional, so neither is checked here.
    pub fn missing_fields(&self) -> Vec<TravelerField> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push(TravelerField::FirstName);
        }
        if self.last_name.trim().is_empty() {
            missing.push(TravelerField::LastName);
        }
        if self.date_of_birth.is_none() {
            missing.push(TravelerField::DateOfBirth);
        }
        if self.email.trim().is_empty() {
            missing.push(TravelerField::Email);
        }
        if self.phone.trim().is_empty() {
            missing.push(TravelerField::Phone);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
