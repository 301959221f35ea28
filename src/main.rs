use activity_board::ui_dioxus::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_logger::init(wasm_logger::Config::default());
        tracing::info!("Starting activity board (web)");
        dioxus_web::launch::launch(App, vec![], dioxus_web::Config::new());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use dioxus_desktop::{Config, WindowBuilder};

        // Initialize logging
        tracing_subscriber::fmt::init();
        tracing::info!("Starting activity board (desktop)");

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Activity Board")
                .with_inner_size(dioxus_desktop::LogicalSize::new(900.0, 1000.0)),
        );
        dioxus_desktop::launch::launch(App, vec![], config);
    }
}
