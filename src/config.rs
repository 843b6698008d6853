//! Environment configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context};

use crate::pricing::{NegativeTotals, PricingOptions, DEFAULT_MAX_STAY_NIGHTS};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_CURRENCY: &str = "BRL";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// JSON catalog to seed the store with; the built-in demo catalog otherwise
    pub catalog_path: Option<PathBuf>,
    /// Display currency code attached to quoted amounts
    pub currency: String,
    pub pricing: PricingOptions,
}

impl Config {
    /// Read configuration from the process environment, after loading `.env`
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("POUSADA_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("Invalid POUSADA_LISTEN_ADDR")?;

        let catalog_path = lookup("POUSADA_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let currency = lookup("POUSADA_CURRENCY")
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let clamp = match lookup("POUSADA_CLAMP_NEGATIVE_TOTALS") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| anyhow!("Invalid POUSADA_CLAMP_NEGATIVE_TOTALS: {}", raw))?,
            None => false,
        };

        let max_stay_nights = match lookup("POUSADA_MAX_STAY_NIGHTS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| anyhow!("Invalid POUSADA_MAX_STAY_NIGHTS: {}", raw))?,
            None => DEFAULT_MAX_STAY_NIGHTS,
        };

        Ok(Self {
            listen_addr,
            catalog_path,
            currency,
            pricing: PricingOptions {
                negative_totals: if clamp {
                    NegativeTotals::ClampToZero
                } else {
                    NegativeTotals::Allow
                },
                max_stay_nights,
            },
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
