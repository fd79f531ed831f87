use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;
use std::fs;
use std::path::Path;

// Defaults reproduce the fixed endpoints the recorder was built around:
// serve on 0.0.0.0:8855, forward to a Seq collector on the loopback.

#[serde_inline_default]
#[derive(Debug, Deserialize, Eq, PartialEq, Clone)]
pub struct Config {
    #[serde_inline_default("0.0.0.0".to_string())]
    pub bind: String,

    #[serde_inline_default(8855_u16)]
    pub port: u16,

    #[serde_inline_default("http://127.0.0.1:5341/".to_string())]
    pub seq_url: String,

    #[serde_inline_default(true)]
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            bind: "0.0.0.0".to_string(),
            port: 8855,
            seq_url: "http://127.0.0.1:5341/".to_string(),
            open_browser: true,
        }
    }
}

pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)?;
    let res = toml::from_str(&content)?;
    Ok(res)
}
