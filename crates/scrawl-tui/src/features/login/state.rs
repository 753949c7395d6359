//! Login form state.

use scrawl_core::session::Credentials;

use crate::common::TextField;

/// Maximum length of the username/password inputs, in characters.
const CREDENTIAL_MAX_CHARS: usize = 20;

/// Which login input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Login form state.
///
/// Holds transient, uncommitted credentials. Submission is gated on
/// [`Credentials::is_valid`]; nothing here touches the network.
#[derive(Debug, Default)]
pub struct LoginFormState {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            username: TextField::with_max(CREDENTIAL_MAX_CHARS),
            password: TextField::with_max(CREDENTIAL_MAX_CHARS),
            focus: LoginField::Username,
        }
    }

    /// Returns the current input as credentials.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.value().to_string(),
            password: self.password.value().to_string(),
        }
    }

    /// Returns true if the submit gate is open.
    pub fn can_submit(&self) -> bool {
        self.credentials().is_valid()
    }

    /// Discards all input and focus state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Moves focus to the other input.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Returns the focused input.
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}
