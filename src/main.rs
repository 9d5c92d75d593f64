use clap::Parser;
use color_eyre::eyre::Result;

use pamui::{
    domain::testimonial::Testimonial,
    infrastructure::{cli::Cli, config::Config},
    integration::app_runner::AppRunner,
    trace_dbg,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = trace_dbg!(<Cli as Parser>::parse());

    // Load configuration (file-based), then apply CLI overrides
    let mut config = Config::new()?;
    if let Some(path) = &args.testimonials {
        config.testimonials = Testimonial::load_all(path)?;
    }
    if args.auto_advance {
        config.carousel.auto_advance_enabled = true;
    }
    log::info!(
        "Starting with {} testimonial(s), auto-advance {}",
        config.testimonials.len(),
        if config.carousel.auto_advance_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    let mut runner = AppRunner::new_with_config(config, args.tick_rate, args.frame_rate)?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
