mod app;
mod config;
mod core;
mod event;
mod log_buffer;
mod screen;
mod ui;

use crate::app::App;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let config = config::Config::from_env();
    log_buffer::init();
    log::info!("search backend: {}", config.server_url);

    let mut terminal = ratatui::init();
    let mut app = App::new(&config);
    let result = app.run(&mut terminal).await;
    ratatui::restore();
    Ok(result?)
}
