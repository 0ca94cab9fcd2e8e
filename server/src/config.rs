use anyhow::{Context, Result, anyhow};
use std::env;
use std::sync::LazyLock;
use url::Url;

/// Loaded once at startup; a missing or malformed variable aborts the
/// process before the router is built.
pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::from_env().expect("invalid configuration"));

#[derive(Clone)]
pub struct Config {
    /// Base URL of the incidents microservice, e.g.
    /// `https://ms.example.com/api/v1/`.
    pub backend_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut raw = env_var("INCIDENCIAS_BACKEND_URL")?;
        // Endpoint paths are joined relative to the base, so the trailing
        // slash is load-bearing.
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let backend_url = Url::parse(&raw).context("INCIDENCIAS_BACKEND_URL is not a valid URL")?;

        Ok(Self { backend_url })
    }
}

fn env_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| anyhow!("missing environment variable: {}", name))
}
