use spotirec::{config, server, state::AppState};

#[tokio::main]
async fn main() {
    config::load_env();

    let state = AppState::new();
    server::start_api_server(state).await;
}
