use std::collections::HashMap;

/// Raw signup form input as submitted. Names and identity fields are
/// trimmed on read; passwords are taken verbatim.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub handle: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub const MIN_PASSWORD_LEN: usize = 8;

impl SignupForm {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let field = |key: &str| params.get(key).map(|v| v.trim().to_string()).unwrap_or_default();
        Self {
            first_name: field("first_name"),
            last_name: field("last_name"),
            handle: field("handle"),
            email: field("email"),
            password: params.get("password").cloned().unwrap_or_default(),
            confirm_password: params.get("confirm_password").cloned().unwrap_or_default(),
        }
    }

    /// Handle as stored: lowercase, so `/u/{handle}` URLs are case-stable.
    pub fn normalized_handle(&self) -> String {
        self.handle.to_lowercase()
    }

    pub fn normalized_email(&self) -> String {
        self.email.to_lowercase()
    }

    /// Validate the form, returning every user-facing problem at once.
    /// An empty list means the form can be submitted.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.first_name.is_empty() {
            errors.push("First name is required.".to_string());
        }
        if self.last_name.is_empty() {
            errors.push("Last name is required.".to_string());
        }

        if self.handle.is_empty() {
            errors.push("Username is required.".to_string());
        } else if !self
            .normalized_handle()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            errors.push("Username may only contain letters, numbers, '-' and '_'.".to_string());
        }

        if self.email.is_empty() {
            errors.push("Email is required.".to_string());
        } else {
            let e = self.normalized_email();
            if !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
                errors.push("Email address doesn't look valid.".to_string());
            }
        }

        if self.password.is_empty() {
            errors.push("Password is required.".to_string());
        } else if self.password.len() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            ));
        }

        if self.confirm_password.is_empty() {
            errors.push("Confirm password is required.".to_string());
        } else if !self.password.is_empty() && self.password != self.confirm_password {
            errors.push("Passwords do not match.".to_string());
        }

        errors
    }
}
