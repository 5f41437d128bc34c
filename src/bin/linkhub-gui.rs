// linkhub GUI - iced-based desktop window

use linkhub::gui::app::LinkhubGui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    iced::application(LinkhubGui::title, LinkhubGui::update, LinkhubGui::view)
        .subscription(LinkhubGui::subscription)
        .theme(LinkhubGui::theme)
        .window_size((480.0, 820.0))
        .run_with(LinkhubGui::new)
}
