//! WebServer process entry point

use clap::Parser;
use shared::logging;

use webserver::{Args, WebServer, WebServerResult};

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // .env first so clap sees its values
    let _ = dotenv::dotenv();

    let args = Args::parse();
    logging::init_tracing(Some(&args.log_level));

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            logging::log_error("Configuration", &e);
            return Err(e);
        }
    };

    logging::log_startup(&format!(
        "book details server on {} (simulated latency: {}, deadline: {:?})",
        config.bind_address(),
        config.simulated_latency,
        config.fetch_deadline_ms
    ));

    let webserver = WebServer::from_config(&config)?;
    webserver.run().await?;

    logging::log_success("WebServer stopped gracefully");
    Ok(())
}
