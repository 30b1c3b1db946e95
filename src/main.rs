#[tokio::main]
async fn main() {
    vocacional::start_server().await;
}
