//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CheckinConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, RateLimitConfig, RedisConfig, ReviewConfig, ServerConfig, SnowflakeConfig,
};
