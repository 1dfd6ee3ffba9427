//! Session state shared by protected views, and the gate that decides whether
//! a protected view may render.
//!
//! The session is passed explicitly to whoever needs it. It remembers the
//! token it last saw verified, so a gate mounted again for the same token
//! renders immediately instead of asking the server again. Changing the token
//! drops that memory.
//!
//! The gate fails closed: without a token, with a rejected token, or when the
//! verification request itself fails, only the loading indicator is shown.

use crate::api::ApiError;
use crate::responses::AuthCheck;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    token: Option<String>,
    verified_for: Option<String>,
}

impl AuthSession {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            verified_for: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replaces the token. A different token invalidates the cached verification.
    pub fn set_token(&mut self, token: Option<String>) {
        let token = token.filter(|t| !t.is_empty());
        if token != self.token {
            self.token = token;
            self.verified_for = None;
        }
    }

    /// Records a positive verification, only if `token` is still current.
    pub fn mark_verified(&mut self, token: &str) {
        if self.token.as_deref() == Some(token) {
            self.verified_for = Some(token.to_string());
        }
    }

    pub fn is_verified(&self) -> bool {
        self.token.is_some() && self.token == self.verified_for
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    Unverified,
    Verified,
}

/// What a gate renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    Protected,
    Loading { can_retry: bool },
}

/// Result of feeding a verification reply to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The token checked out; the caller records it in the session.
    Verified(String),
    Rejected,
    Failed(String),
    /// The reply belongs to a token that is no longer being checked.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGate {
    status: GateStatus,
    checked: Option<String>,
    failure: Option<String>,
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthGate {
    pub fn new() -> Self {
        Self {
            status: GateStatus::Unverified,
            checked: None,
            failure: None,
        }
    }

    pub fn status(&self) -> GateStatus {
        self.status
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn view(&self) -> GateView {
        match self.status {
            GateStatus::Verified => GateView::Protected,
            GateStatus::Unverified => GateView::Loading {
                can_retry: self.failure.is_some(),
            },
        }
    }

    /// Aligns the gate with `session`. Call on mount and on every session
    /// change. Returns the token to verify when a request is needed.
    pub fn sync(&mut self, session: &AuthSession) -> Option<String> {
        let Some(token) = session.token() else {
            self.status = GateStatus::Unverified;
            self.checked = None;
            self.failure = None;
            return None;
        };

        if session.is_verified() {
            self.status = GateStatus::Verified;
            self.checked = Some(token.to_string());
            self.failure = None;
            return None;
        }

        if self.checked.as_deref() == Some(token) {
            return None;
        }

        self.status = GateStatus::Unverified;
        self.failure = None;
        self.checked = Some(token.to_string());
        Some(token.to_string())
    }

    /// Applies the verification reply for `token`.
    pub fn resolve(&mut self, token: &str, result: Result<AuthCheck, ApiError>) -> Resolution {
        if self.checked.as_deref() != Some(token) {
            return Resolution::Stale;
        }

        match result {
            Ok(AuthCheck { ok: true }) => {
                self.status = GateStatus::Verified;
                self.failure = None;
                Resolution::Verified(token.to_string())
            }
            Ok(AuthCheck { ok: false }) => {
                self.status = GateStatus::Unverified;
                self.failure = None;
                Resolution::Rejected
            }
            Err(e) => {
                self.status = GateStatus::Unverified;
                self.failure = Some(e.to_string());
                Resolution::Failed(e.to_string())
            }
        }
    }

    /// Forgets the last check so the current token is verified again.
    pub fn retry(&mut self, session: &AuthSession) -> Option<String> {
        self.checked = None;
        self.failure = None;
        self.sync(session)
    }
}
