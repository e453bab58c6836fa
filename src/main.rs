#[tokio::main]
async fn main() {
    pass_backend::run().await;
}
