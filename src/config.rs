use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub service: ServiceConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Wallet address receiving payments.
    pub pay_to: String,
    /// Chain identifier advertised in 402 responses, e.g. "base".
    pub network: String,
    /// Absolute base URL used to build per-endpoint resource URLs.
    pub base_url: String,
    /// Optional asset contract address (USDC on the configured network).
    pub asset: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3402".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
            },
            service: ServiceConfig {
                name: env::var("SERVICE_NAME").unwrap_or_else(|_| "x402-services".to_string()),
                description: env::var("SERVICE_DESCRIPTION")
                    .unwrap_or_else(|_| "Pay-per-use text services via x402".to_string()),
            },
            payment: PaymentConfig {
                pay_to: env::var("PAYTO_ADDRESS")
                    .unwrap_or_else(|_| "0xda53D50572B8124A6B9d6d147d532Db59ABe0610".to_string()),
                network: env::var("X402_NETWORK").unwrap_or_else(|_| "base".to_string()),
                base_url: env::var("PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:3402".to_string()),
                asset: env::var("X402_ASSET").ok(),
            },
        })
    }
}
