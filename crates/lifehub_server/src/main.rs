//! LifeHub server entry point.

#[tokio::main]
async fn main() -> std::io::Result<()> {
    lifehub_server::start_server().await
}
