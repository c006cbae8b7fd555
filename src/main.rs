use leptos::*;

use vento_ui::api::StoreClient;
use vento_ui::app::App;
use vento_ui::config::Config;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Both store settings are required; refuse to mount anything without them.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => panic!("configuration error: {}", e),
    };

    let client = StoreClient::new(&config);

    mount_to_body(move || view! { <App client=client /> });
}
