#[tokio::main]
async fn main() {
    if let Err(e) = mediacat::cli::run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
