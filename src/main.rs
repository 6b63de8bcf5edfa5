use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(error) = mailroom::run().await {
        error!("Mailroom exited with error: {:?}", error);
        std::process::exit(1);
    }
}
