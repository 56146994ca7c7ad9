use crate::{config::Config, error, server};

pub async fn serve(config: Config, addr: Option<String>) {
    let config = match addr {
        Some(server_address) => Config {
            server_address,
            ..config
        },
        None => config,
    };

    if let Err(e) = server::start_api_server(&config).await {
        error!("Server stopped. Err: {}", e);
    }
}
