//! Composed signing contexts.
//!
//! An [`AuthContext`] holds the credentials a request is authenticated
//! with: always an application credential, optionally a user credential on
//! top. It turns a [`CanonicalParams`] set into the full set of auth
//! headers, producing one signature per credential. Both are computed
//! over the same canonical content, so neither signature can be paired
//! with signed data the other credential never saw.

use crate::auth::{sign, CanonicalParams, Credential};

/// Header carrying the application credential's identity.
pub const HEADER_SYSTEM_AUTH_ID: &str = "auth_system_auth_id";
/// Header carrying the application credential's public key.
pub const HEADER_SYSTEM_PUBLIC_KEY: &str = "auth_system_public_key";
/// Header carrying the application signature.
pub const HEADER_SYSTEM_SIGNATURE: &str = "auth_system_signature";
/// Header carrying the user credential's identity.
pub const HEADER_USER_AUTH_ID: &str = "auth_user_auth_id";
/// Header carrying the user credential's public key.
pub const HEADER_USER_PUBLIC_KEY: &str = "auth_user_public_key";
/// Header carrying the user signature.
pub const HEADER_USER_SIGNATURE: &str = "auth_user_signature";
/// Header carrying the per-send nonce.
pub const HEADER_NONCE: &str = "auth_nonce";
/// Header carrying the per-send epoch timestamp.
pub const HEADER_TIMESTAMP: &str = "auth_timestamp";

/// The signing capability for one or two credentials.
///
/// Calls are made either with the application credential alone or with an
/// application credential plus a user credential. There is no user-only
/// form.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::{AuthContext, Credential, PublicKey, PrivateKey};
///
/// let app = Credential::new(
///     1,
///     PublicKey::new("app-pub").unwrap(),
///     PrivateKey::new("app-priv").unwrap(),
/// );
/// let user = Credential::new(
///     9,
///     PublicKey::new("user-pub").unwrap(),
///     PrivateKey::new("user-priv").unwrap(),
/// );
///
/// let app_only = AuthContext::app_only(app.clone());
/// assert!(app_only.user().is_none());
///
/// let dual = AuthContext::app_and_user(app, user);
/// assert!(dual.user().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthContext {
    /// Application credential only.
    AppOnly(Credential),
    /// Application credential plus a user credential.
    AppAndUser {
        /// The application credential.
        app: Credential,
        /// The user credential.
        user: Credential,
    },
}

impl AuthContext {
    /// Creates an application-only context.
    #[must_use]
    pub const fn app_only(app: Credential) -> Self {
        Self::AppOnly(app)
    }

    /// Creates an application + user context.
    #[must_use]
    pub const fn app_and_user(app: Credential, user: Credential) -> Self {
        Self::AppAndUser { app, user }
    }

    /// Returns the application credential.
    #[must_use]
    pub const fn app(&self) -> &Credential {
        match self {
            Self::AppOnly(app) | Self::AppAndUser { app, .. } => app,
        }
    }

    /// Returns the user credential, if this context carries one.
    #[must_use]
    pub const fn user(&self) -> Option<&Credential> {
        match self {
            Self::AppOnly(_) => None,
            Self::AppAndUser { user, .. } => Some(user),
        }
    }

    /// Returns the identity header fields for every credential present.
    ///
    /// These fields participate in signing, so they are also inserted into
    /// the canonical parameter set before the signatures are computed.
    #[must_use]
    pub fn identity_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (HEADER_SYSTEM_AUTH_ID, self.app().identity().to_string()),
            (
                HEADER_SYSTEM_PUBLIC_KEY,
                self.app().public_key().as_ref().to_string(),
            ),
        ];
        if let Some(user) = self.user() {
            fields.push((HEADER_USER_AUTH_ID, user.identity().to_string()));
            fields.push((
                HEADER_USER_PUBLIC_KEY,
                user.public_key().as_ref().to_string(),
            ));
        }
        fields
    }

    /// Computes the signature headers over a finished canonical set.
    ///
    /// One signature per credential, each covering the identical canonical
    /// content. The caller must have already inserted the identity fields,
    /// nonce, timestamp, URL, and body fields into `params`.
    #[must_use]
    pub fn signature_headers(&self, params: &CanonicalParams) -> Vec<(&'static str, String)> {
        let mut headers = vec![(HEADER_SYSTEM_SIGNATURE, sign(params, self.app()))];
        if let Some(user) = self.user() {
            headers.push((HEADER_USER_SIGNATURE, sign(params, user)));
        }
        headers
    }
}
