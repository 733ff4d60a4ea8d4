use k_shortest_paths::web::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [port] [default_k]
    let args: Vec<String> = env::args().collect();
    let mut config = ServerConfig::default();
    if let Some(port) = args.get(1) {
        config.port = port.parse()?;
    }
    if let Some(k) = args.get(2) {
        config.default_k = k.parse()?;
    }

    println!("Starting k-shortest-paths route server");
    println!("   Port: {}", config.port);
    println!("   Default k: {}", config.default_k);
    println!("   CORS enabled: {}", config.enable_cors);
    println!();

    start_server(config).await?;

    Ok(())
}
