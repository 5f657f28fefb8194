use leptos::*;

use yupcha::api;
use yupcha::app::App;

fn main() {
    // Setup logging
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("Yupcha started, backend at {}", api::api_base());

    // Mount the <App> component to the <body>
    mount_to_body(App);
}
