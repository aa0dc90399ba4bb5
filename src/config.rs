use anyhow::Context;

/// Default bcrypt work factor; overridable via BCRYPT_COST.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_BCRYPT_COST);
        Ok(Self {
            database_url,
            bcrypt_cost,
        })
    }
}
