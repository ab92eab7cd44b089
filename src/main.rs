#[tokio::main]
async fn main() {
    wishflow_backend::run().await;
}
