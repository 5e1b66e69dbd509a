use error_stack::{Report, Result};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};

use super::ParseError;
use crate::util::figment::FigmentErrorAttachable;

#[derive(Debug, Deserialize)]
pub struct Server {
    #[serde(default = "defaults::ip")]
    pub ip: IpAddr,
    #[serde(default = "defaults::port")]
    pub port: u16,
    #[serde(default = "defaults::workers")]
    pub workers: usize,
    #[serde(default)]
    pub db: super::Database,
    #[serde(default)]
    pub auth: super::AdminAuth,
    #[serde(default)]
    pub uploads: super::Uploads,
}

impl Server {
    pub fn load() -> Result<Self, ParseError> {
        dotenvy::dotenv().ok();

        let config = Self::figment()
            .extract::<Self>()
            .map_err(|e| Report::new(ParseError).attach_figment_error(e))?;

        Ok(config)
    }
}

impl Server {
    const DEFAULT_CONFIG_FILE: &'static str = "shelf.toml";

    /// Creates a default [`figment::Figment`] object to load server
    /// configuration. Split out from [`Server::load`] for testing.
    pub(crate) fn figment() -> figment::Figment {
        use figment::{
            providers::{Env, Format, Toml},
            Figment,
        };

        Figment::new()
            .merge(Toml::file(Self::DEFAULT_CONFIG_FILE))
            // The env provider splits nested keys on the first underscore,
            // so multi-word leaf fields need explicit mappings.
            .merge(Env::prefixed("SHELF_").map(|v| match v.as_str() {
                "DB_POOL_SIZE" => "db.pool_size".into(),
                "DB_TIMEOUT_SECS" => "db.timeout_secs".into(),
                "AUTH_SECURE_COOKIE" => "auth.secure_cookie".into(),
                "UPLOADS_PUBLIC_PREFIX" => "uploads.public_prefix".into(),
                _ => v.as_str().replace('_', ".").into(),
            }))
            // Environment variable aliases
            .merge(Env::raw().map(|v| match v.as_str() {
                "DATABASE_URL" => "db.url".into(),
                "ADMIN_USERNAME" => "auth.username".into(),
                "ADMIN_PASSWORD" => "auth.password".into(),
                _ => v.into(),
            }))
    }
}

mod defaults {
    use std::net::{IpAddr, Ipv4Addr};

    pub fn ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    pub fn port() -> u16 {
        3000
    }

    pub fn workers() -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::num::{NonZeroU32, NonZeroU64};

    #[test]
    fn env_aliases() {
        Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "sqlite:another.db");
            jail.set_env("ADMIN_USERNAME", "bookkeeper");
            jail.set_env("ADMIN_PASSWORD", "hunter2hunter2");

            jail.set_env("SHELF_DB_POOL_SIZE", "7");
            jail.set_env("SHELF_DB_TIMEOUT_SECS", "30");
            jail.set_env("SHELF_AUTH_SECURE_COOKIE", "true");
            jail.set_env("SHELF_UPLOADS_DIR", "/tmp/shelf-uploads");
            jail.set_env("SHELF_UPLOADS_PUBLIC_PREFIX", "/media");
            jail.set_env("SHELF_PORT", "8080");

            let config: Server = Server::figment().extract()?;
            assert_eq!(config.db.url, "sqlite:another.db");
            assert_eq!(config.db.pool_size, NonZeroU32::new(7).unwrap());
            assert_eq!(config.db.timeout_secs, NonZeroU64::new(30).unwrap());

            assert_eq!(config.auth.username, "bookkeeper");
            assert_eq!(config.auth.password.as_str(), "hunter2hunter2");
            assert!(config.auth.secure_cookie);

            assert_eq!(config.uploads.dir.to_str(), Some("/tmp/shelf-uploads"));
            assert_eq!(config.uploads.public_prefix, "/media");
            assert_eq!(config.port, 8080);

            Ok(())
        });
    }

    #[test]
    fn defaults() {
        Jail::expect_with(|_jail| {
            let config: Server = Server::figment().extract()?;
            assert_eq!(config.ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
            assert_eq!(config.port, 3000);
            assert_eq!(config.auth.username, "admin");
            assert_eq!(config.auth.password.as_str(), "changeme123");
            assert!(!config.auth.secure_cookie);
            assert_eq!(config.db.url, "sqlite:shelf.db");
            Ok(())
        });
    }
}
