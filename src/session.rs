use tracing::{
    info,
    warn,
};

use crate::core::{
    models::Credentials,
    ApiError,
    FormError,
    RequestId,
    RequestSeq,
    SessionUser,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn credentials(&self) -> Result<Credentials, FormError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Missing("Email"));
        }
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }
        Ok(Credentials { email: email.to_string(), password: self.password.clone() })
    }
}

/// Who the backend thinks we are. The identity itself lives in the cookie jar.
#[derive(Debug, Default)]
pub struct SessionState {
    authenticated: bool,
    user: Option<SessionUser>,
    seq: RequestSeq,
    busy: bool,
    error: Option<ApiError>,
    pub form: LoginForm,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| {
            [&user.full_name, &user.username, &user.email]
                .into_iter()
                .find(|name| !name.is_empty())
                .map(String::as_str)
                .unwrap_or("Signed in")
        })
    }

    pub fn begin(&mut self) -> RequestId {
        self.busy = true;
        self.seq.issue()
    }

    /// Any failure to check the session counts as signed out.
    pub fn finish_check(&mut self, id: RequestId, result: Result<bool, ApiError>) -> bool {
        if !self.seq.is_current(id) {
            return false;
        }
        self.busy = false;

        self.authenticated = match result {
            Ok(authenticated) => authenticated,
            Err(e) => {
                warn!("Session check failed, treating as signed out: {e}");
                false
            }
        };
        if !self.authenticated {
            self.user = None;
        }
        true
    }

    pub fn finish_login(&mut self, id: RequestId, result: Result<SessionUser, ApiError>) -> bool {
        if !self.seq.is_current(id) {
            return false;
        }
        self.busy = false;

        match result {
            Ok(user) => {
                info!("Signed in as {}", user.email);
                self.authenticated = true;
                self.user = Some(user);
                self.error = None;
                self.form = LoginForm::default();
                true
            }
            Err(e) => {
                warn!("Login failed: {e}");
                self.error = Some(e);
                self.form.password.clear();
                false
            }
        }
    }

    pub fn finish_logout(&mut self, id: RequestId, result: Result<(), ApiError>) -> bool {
        if !self.seq.is_current(id) {
            return false;
        }
        self.busy = false;

        match result {
            Ok(()) => {
                info!("Signed out");
                self.authenticated = false;
                self.user = None;
                self.error = None;
                true
            }
            Err(e) => {
                warn!("Logout failed: {e}");
                self.error = Some(e);
                false
            }
        }
    }
}
