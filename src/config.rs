use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    // Rate limiting
    pub rate_read_per_min: u32,
    pub rate_mutation_per_min: u32,

    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://hrms.db".to_string()),

            rate_read_per_min: env::var("RATE_READ_PER_MIN")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .expect("RATE_READ_PER_MIN must be a number"),
            rate_mutation_per_min: env::var("RATE_MUTATION_PER_MIN")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .expect("RATE_MUTATION_PER_MIN must be a number"),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        }
    }
}
