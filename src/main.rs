use vinova_waitlist::{config::get_or_init_config, App, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // We have a different logging mechanism for production
    #[cfg(not(debug_assertions))]
    {
        vinova_waitlist::init_production_tracing()
    }
    #[cfg(debug_assertions)]
    {
        vinova_waitlist::init_dbg_tracing();
    }

    let config = get_or_init_config().clone();
    let app = App::build_from_config(config).await?;

    vinova_waitlist::serve(app).await?;

    Ok(())
}
