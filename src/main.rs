use gpui::{App, Application};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lichess_board::BoardConfig;
use lichess_board::app;
use lichess_board::ui::FileAssets;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("lichess_board=info".parse()?))
        .init();

    let config = BoardConfig::load();

    Application::new()
        .with_assets(FileAssets::new())
        .run(move |cx: &mut App| {
            if let Err(err) = app::run(cx, config) {
                tracing::error!("{err:#}");
                cx.quit();
            }
        });
    Ok(())
}
