use serde::Deserialize;

use crate::util::sensitive::Sensitive;

/// The single configured admin credential pair.
///
/// Authentication is a shared-secret gate: there is no per-user session
/// management in the cookie-based login path.
#[derive(Debug, Deserialize)]
pub struct AdminAuth {
    #[serde(default = "defaults::username")]
    pub username: String,
    #[serde(default = "defaults::password")]
    pub password: Sensitive<String>,
    /// Marks the session cookie `Secure`. Off by default so local
    /// plain-HTTP development keeps working; production deployments
    /// behind TLS should turn it on.
    #[serde(default)]
    pub secure_cookie: bool,
}

impl Default for AdminAuth {
    fn default() -> Self {
        Self {
            username: defaults::username(),
            password: defaults::password(),
            secure_cookie: false,
        }
    }
}

mod defaults {
    use crate::util::sensitive::Sensitive;

    pub fn username() -> String {
        "admin".to_string()
    }

    pub fn password() -> Sensitive<String> {
        Sensitive::new("changeme123".to_string())
    }
}
