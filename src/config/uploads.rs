use serde::Deserialize;
use std::path::PathBuf;

/// Where uploaded thumbnails land on disk and the public URL prefix they
/// are served under.
#[derive(Debug, Deserialize)]
pub struct Uploads {
    #[serde(default = "defaults::dir")]
    pub dir: PathBuf,
    #[serde(default = "defaults::public_prefix")]
    pub public_prefix: String,
}

impl Default for Uploads {
    fn default() -> Self {
        Self {
            dir: defaults::dir(),
            public_prefix: defaults::public_prefix(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        PathBuf::from("public/uploads")
    }

    pub fn public_prefix() -> String {
        "/uploads".to_string()
    }
}
