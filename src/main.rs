use clap::Parser;
use color_eyre::eyre::Result;

use chansize::{
    app::App,
    domain::sats::group_thousands,
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?.with_cli(&args);

    let mut tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate)
        .mouse(!args.no_mouse)
        .paste(!args.no_paste);
    let mut app = App::new(config);
    let submitted = app.run(&mut tui).await?;
    drop(tui);

    if let Some(sats) = submitted {
        log::info!("Submitted channel size: {sats} sats");
        println!("{} sats", group_thousands(sats));
    }

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
