//! Login form state.
//!
//! Fields are only hinted as required in markup; submission forwards whatever
//! was typed to the auth collaborator.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Credentials captured at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub local_error: Option<String>,
}

impl LoginForm {
    /// Clear the previous error and snapshot the credentials to send.
    pub fn begin_submit(&mut self) -> Credentials {
        self.local_error = None;
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }

    /// Record a failed attempt. Both fields stay filled in for retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.local_error = Some(message.into());
    }

    /// Forget the password once the session is established.
    pub fn succeed(&mut self) {
        self.password.clear();
        self.local_error = None;
    }

    /// Message to show: the local error first, else the collaborator's.
    #[must_use]
    pub fn displayed_error(&self, auth_error: Option<&str>) -> Option<String> {
        self.local_error.clone().or_else(|| auth_error.map(str::to_owned))
    }
}
