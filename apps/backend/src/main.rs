#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sayings_journal_backend::run().await
}
