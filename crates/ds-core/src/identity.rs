//! Login state behind the navigation chrome

use parking_lot::RwLock;
use tracing::info;

/// Authentication provider the navbar renders its sign-in control from.
///
/// The viewer only ever needs the three calls the chrome makes; how a
/// provider performs them (hosted login page, SSO, nothing at all) is its
/// own business.
pub trait IdentityProvider: Send + Sync {
    fn is_authenticated(&self) -> bool;

    /// Begin an interactive login
    fn login_with_redirect(&self);

    fn logout(&self);
}

/// In-process identity used when no external provider is wired up
#[derive(Default)]
pub struct LocalIdentity {
    authenticated: RwLock<bool>,
}

impl LocalIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityProvider for LocalIdentity {
    fn is_authenticated(&self) -> bool {
        *self.authenticated.read()
    }

    fn login_with_redirect(&self) {
        *self.authenticated.write() = true;
        info!("signed in with local identity");
    }

    fn logout(&self) {
        *self.authenticated.write() = false;
        info!("signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_identity_toggles() {
        let identity = LocalIdentity::new();
        assert!(!identity.is_authenticated());

        identity.login_with_redirect();
        assert!(identity.is_authenticated());

        identity.logout();
        assert!(!identity.is_authenticated());
    }
}
