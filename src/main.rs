#[tokio::main]
async fn main() {
    pms_backend::run().await;
}
