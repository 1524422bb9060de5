use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::{AppError, BloodType};

/// Platform role. The set is closed; anything else is an invalid account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Donor,
    Hospital,
    Manager,
}

impl Role {
    /// Parse the `role` attribute of a user. Matching is exact; anything
    /// else, including other casings, yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "donor" => Some(Role::Donor),
            "hospital" => Some(Role::Hospital),
            "manager" => Some(Role::Manager),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Hospital => "hospital",
            Role::Manager => "manager",
        }
    }

    /// Short label for the navigation badge.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Donor => "Donor",
            Role::Hospital => "Hospital",
            Role::Manager => "Manager",
        }
    }

    /// Long label used on the sign-up form.
    pub fn signup_label(&self) -> &'static str {
        match self {
            Role::Donor => "Donor",
            Role::Hospital => "Hospital / Emergency Admin",
            Role::Manager => "Blood Bank Manager",
        }
    }
}

/// The authenticated user as returned by `/auth/login`.
///
/// `role` stays a raw string so that an account with an unexpected role
/// still deserializes and can be routed to the invalid-role view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_donation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl SessionUser {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration profile. Role-specific fields are only sent for that role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RegisterRequest {
    /// Field validation plus the donor blood-type rule.
    pub fn check(&self) -> Result<(), AppError> {
        let mut field_errors = match self.validate() {
            Ok(()) => HashMap::new(),
            Err(errors) => AppError::from(errors).field_errors,
        };
        if self.role == Role::Donor && self.blood_type.is_none() {
            field_errors.insert(
                "blood_type".to_string(),
                "Blood type required for donors".to_string(),
            );
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(
                "Please fill in all required fields",
                field_errors,
            ))
        }
    }

    /// Drop attributes that do not belong to the selected role and blank optionals.
    pub fn normalized(mut self) -> Self {
        if self.role != Role::Donor {
            self.blood_type = None;
        }
        if self.role != Role::Hospital {
            self.hospital_name = None;
            self.location = None;
        }
        self.phone = self.phone.filter(|p| !p.trim().is_empty());
        self
    }
}

/// Successful login: bearer token plus profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Registration acknowledgement.
///
/// Some deployments return a full session, others only the new user id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RegisterResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RegisterResponse {
    /// The session carried by the response, if it carries one.
    pub fn into_auth(self) -> Option<AuthResponse> {
        match (self.token, self.user) {
            (Some(token), Some(user)) if !token.is_empty() => Some(AuthResponse { token, user }),
            _ => None,
        }
    }
}

/// Plain acknowledgement body (`{"message": "..."}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
