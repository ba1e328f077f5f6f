use gym_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    gym_server::init_logger();

    print_banner();

    tracing::info!("Gym back-office server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state (work dir, database, indexes)
    let state = ServerState::initialize(&config).await?;

    // 4. Seed the default plan catalog outside production
    if !config.is_production() {
        gym_server::db::seed::seed_default_plans(&state.db).await?;
    }

    // 5. Start the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
