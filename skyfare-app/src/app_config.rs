use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub supplier: SupplierConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_booking_fee_rate")]
    pub booking_fee_rate: f64,
    #[serde(default = "default_max_travelers")]
    pub max_travelers_per_category: u32,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            booking_fee_rate: default_booking_fee_rate(),
            max_travelers_per_category: default_max_travelers(),
        }
    }
}

fn default_booking_fee_rate() -> f64 {
    0.12
}

fn default_max_travelers() -> u32 {
    9
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupplierConfig {
    #[serde(default = "default_supplier_name")]
    pub name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for SupplierConfig {
    fn default() -> Self {
        Self {
            name: default_supplier_name(),
            currency: default_currency(),
        }
    }
}

fn default_supplier_name() -> String {
    "mock".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, also optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SKYFARE__BUSINESS_RULES__BOOKING_FEE_RATE=0.1`
            .add_source(config::Environment::with_prefix("SKYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
