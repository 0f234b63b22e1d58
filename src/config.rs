use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub form: FormConfig,
}

#[derive(Deserialize, Clone)]
pub struct EndpointConfig {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_millis: u64,
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

#[derive(Deserialize, Clone)]
pub struct FormConfig {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub warmup_delay_millis: u64,
}

impl FormConfig {
    pub fn warmup_delay(&self) -> Duration {
        Duration::from_millis(self.warmup_delay_millis)
    }
}

pub enum Environment {
    Local,
    Production,
}

impl From<Environment> for &'static str {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            s => Err(format!(
                "{} is not supported environment. Use either `local` or `production`",
                s
            )),
        }
    }
}

pub fn read_config() -> Result<Config, config::ConfigError> {
    let curr_dir = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let config_dir = curr_dir.join("config");

    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| Into::<&str>::into(Environment::Local).to_string())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let env_file = format!("{}.yaml", Into::<&str>::into(env));

    let builder = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")).required(true))
        .add_source(config::File::from(config_dir.join(env_file)).required(true))
        .add_source(config::Environment::with_prefix("APP").separator("__"));
    builder.build()?.try_deserialize()
}
