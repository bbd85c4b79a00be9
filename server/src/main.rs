use server::{application, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    application::init_tracing();

    let settings = Settings::new()?;
    application::serve(settings).await
}
