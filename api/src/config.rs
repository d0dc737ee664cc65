use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Seed the store with the example recipes on startup
    pub seed_recipes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_recipes: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("HOST").ok().as_deref(),
            env::var("PORT").ok().as_deref(),
            env::var("SEED_RECIPES").ok().as_deref(),
        )
    }

    fn from_vars(host: Option<&str>, port: Option<&str>, seed: Option<&str>) -> Self {
        let defaults = Self::default();

        Self {
            host: host
                .map(|h| {
                    h.parse().unwrap_or_else(|_| {
                        tracing::warn!("Invalid HOST '{}', using {}", h, defaults.host);
                        defaults.host
                    })
                })
                .unwrap_or(defaults.host),
            port: port
                .map(|p| {
                    p.parse().unwrap_or_else(|_| {
                        tracing::warn!("Invalid PORT '{}', using {}", p, defaults.port);
                        defaults.port
                    })
                })
                .unwrap_or(defaults.port),
            seed_recipes: seed
                .map(|s| {
                    parse_flag(s).unwrap_or_else(|| {
                        tracing::warn!("Invalid SEED_RECIPES '{}', seeding anyway", s);
                        defaults.seed_recipes
                    })
                })
                .unwrap_or(defaults.seed_recipes),
        }
    }

    /// Address the server listens on
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
