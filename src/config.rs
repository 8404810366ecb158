use std::env::VarError;

use anyhow::anyhow;

pub const REQUIRED_VARIABLES: &[&str] = &["MAPS_API_KEY"];

const DEFAULT_PORT: u16 = 8001;

pub struct Config {
    pub maps_api_key: String,
    pub listen_port: u16,
    pub allow_any_origin: bool,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        let maps_api_key = env("MAPS_API_KEY")?;

        let listen_port = match env_opt("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow!("PORT value {raw} is not a valid port number"))?,
            None => DEFAULT_PORT,
        };

        let allow_any_origin = env_opt("DISABLE_CORS").is_none();

        Ok(Self {
            maps_api_key,
            listen_port,
            allow_any_origin,
        })
    }

    pub fn log(&self) {
        log::info!("Listen port: {}", self.listen_port);
        log::info!("Allow any origin: {}", self.allow_any_origin);
    }
}

fn env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|e| match e {
        VarError::NotPresent => anyhow!("{name} not set"),
        VarError::NotUnicode(_) => anyhow!("{name} value is not valid unicode"),
    })
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
