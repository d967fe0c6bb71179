use account_management::server::{config::Config, error::Error, router, startup};
use dioxus_logger::tracing::{self, Level};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let app_state = startup::build_app_state(&config)?;
    let session = startup::connect_to_session(&config).await?;

    let app = router::routes().with_state(app_state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.listen_address).await?;

    tracing::info!("Listening on {}", config.listen_address);

    axum::serve(listener, app).await?;

    Ok(())
}
