use crate::config;
use crate::http::Error;

/// Credential check against the configured admin pair.
///
/// Success only tells the controller to issue the session cookie; there is
/// no account lookup, lockout or attempt tracking.
#[derive(Debug)]
pub struct Login<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl Login<'_> {
    #[tracing::instrument(skip_all, name = "services.auth.login")]
    pub fn perform(self, config: &config::AdminAuth) -> Result<(), Error> {
        let expected = config.password.as_str();

        // compare every character even after the first mismatch
        let mut matched =
            self.username == config.username && self.password.len() == expected.len();
        for (a, b) in self.password.chars().zip(expected.chars()) {
            matched = matched && (a == b);
        }

        if matched {
            Ok(())
        } else {
            Err(Error::unauthorized())
        }
    }
}
