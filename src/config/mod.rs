use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct BackendSettings {
    /// Origin of the PayNow decision backend, without a trailing slash
    /// (e.g. https://paynow-2ppo.onrender.com).
    pub url: String,
    /// Value sent in the X-API-Key header. An unset key sends an empty
    /// string; the backend decides whether to accept it.
    #[serde(default = "default_api_key")]
    pub api_key: Secret<String>,
}

fn default_api_key() -> Secret<String> {
    Secret::new(String::new())
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("config");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
