/// In-memory bearer token for the current user.
///
/// Nothing is persisted: dropping the session (or calling [`Session::clear`])
/// forgets the credential.
#[derive(Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly issued token. Blank tokens are ignored.
    pub fn set_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.token = if token.trim().is_empty() { None } else { Some(token) };
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Forget the token (sign-out or expiry).
    pub fn clear(&mut self) {
        self.token = None;
    }
}
