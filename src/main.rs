use log::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    info!(
        "markdesk host serving {} operations over stdio",
        markdesk::bridge::OPERATIONS.len()
    );
    markdesk::server::run().await
}
