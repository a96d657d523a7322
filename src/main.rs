use config::Config;
use dotenvy::dotenv;

use hotel_admin::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .set_default("address", "127.0.0.1")
        .map_err(|e| std::io::Error::other(format!("Failed to set default: {e}")))?
        .set_default("port", 8080)
        .map_err(|e| std::io::Error::other(format!("Failed to set default: {e}")))?
        .set_default("templates_dir", "templates/**/*.html")
        .map_err(|e| std::io::Error::other(format!("Failed to set default: {e}")))?
        .set_default("api_base_url", "http://localhost:8081")
        .map_err(|e| std::io::Error::other(format!("Failed to set default: {e}")))?
        .set_default("api_timeout_ms", 10_000)
        .map_err(|e| std::io::Error::other(format!("Failed to set default: {e}")))?
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    hotel_admin::run(server_config).await
}
