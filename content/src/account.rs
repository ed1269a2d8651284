//! Sign-in and change-password form validation.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use crate::error::FieldError;
use crate::types::{ChangePasswordRequest, LoginRequest};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email is required."));
        } else if !email.contains('@') {
            errors.push(FieldError::new("email", "Enter a valid email address."));
        }
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required."));
        }
        errors
    }

    /// Request body, or every validation error.
    pub fn to_request(&self) -> Result<LoginRequest, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.old_password.is_empty() {
            errors.push(FieldError::new("old_password", "Current password is required."));
        }
        if self.new_password.is_empty() {
            errors.push(FieldError::new("new_password", "New password is required."));
        } else if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError::new("new_password", "New password must be at least 8 characters."));
        } else if self.new_password == self.old_password {
            errors.push(FieldError::new("new_password", "New password must differ from the current one."));
        }
        if self.confirm_password.is_empty() {
            errors.push(FieldError::new("confirm_password", "Please confirm the new password."));
        } else if self.confirm_password != self.new_password {
            errors.push(FieldError::new("confirm_password", "Passwords do not match."));
        }
        errors
    }

    pub fn to_request(&self) -> Result<ChangePasswordRequest, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ChangePasswordRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }
}
