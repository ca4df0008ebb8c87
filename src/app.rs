//! Demo application setup and window creation.

use anyhow::Context as _;
use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use tracing::info;

use crate::config::BoardConfig;
use crate::models::BoardModel;
use crate::ui::views::DemoView;

/// Open the demo window
pub fn run(cx: &mut App, config: BoardConfig) -> anyhow::Result<()> {
    gpui_component::init(cx);

    let model = cx.new(|_| BoardModel::new(config));

    let bounds = Bounds::centered(None, size(px(600.0), px(700.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| DemoView::new(model, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .context("failed to open the board window")?;

    info!("board window opened");
    Ok(())
}
