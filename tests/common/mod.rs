use paynow_console::config::{BackendSettings, ServerSettings, Settings};
use paynow_console::startup::Application;
use secrecy::Secret;

pub const TEST_API_KEY: &str = "test-key";

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the application on a random port, pointed at the given
    /// backend origin.
    pub async fn spawn(backend_url: &str) -> Self {
        let configuration = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            backend: BackendSettings {
                url: backend_url.to_string(),
                api_key: Secret::new(TEST_API_KEY.to_string()),
            },
        };

        let app = Application::build(configuration)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
        }
    }

    /// Spawn the application pointed at an origin nothing listens on, to
    /// simulate a backend that is unreachable.
    pub async fn spawn_with_dead_backend() -> Self {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind throwaway port");
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        Self::spawn(&format!("http://127.0.0.1:{}", port)).await
    }
}
