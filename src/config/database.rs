use serde::Deserialize;
use std::num::{NonZeroU32, NonZeroU64};

#[derive(Debug, Deserialize)]
pub struct Database {
    #[serde(default = "defaults::url")]
    pub url: String,
    #[serde(default = "defaults::pool_size")]
    pub pool_size: NonZeroU32,
    #[serde(default = "defaults::timeout_secs")]
    pub timeout_secs: NonZeroU64,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: defaults::url(),
            pool_size: defaults::pool_size(),
            timeout_secs: defaults::timeout_secs(),
        }
    }
}

mod defaults {
    use std::num::{NonZeroU32, NonZeroU64};

    pub fn url() -> String {
        "sqlite:shelf.db".to_string()
    }

    pub fn pool_size() -> NonZeroU32 {
        NonZeroU32::new(5).expect("nonzero literal")
    }

    pub fn timeout_secs() -> NonZeroU64 {
        NonZeroU64::new(5).expect("nonzero literal")
    }
}
