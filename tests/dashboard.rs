//! DOM-level dashboard tests, run under wasm-pack / wasm-bindgen-test.

#![cfg(target_arch = "wasm32")]

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use vento_ui::api::StoreClient;
use vento_ui::config::Config;
use vento_ui::pages::Dashboard;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_host() -> web_sys::HtmlElement {
    let document = leptos::document();
    let parent: web_sys::HtmlElement = document
        .create_element("div")
        .unwrap()
        .unchecked_into();
    document.body().unwrap().append_child(&parent).unwrap();
    parent
}

fn unreachable_client() -> StoreClient {
    // Port 9 (discard) is unroutable; the count request never resolves
    // within the synchronous part of the test.
    StoreClient::new(&Config {
        store_url: "http://127.0.0.1:9".to_string(),
        anon_key: "anon-key".to_string(),
    })
}

#[wasm_bindgen_test]
fn dashboard_shows_spinner_and_no_stat_cards_while_pending() {
    let parent = mount_host();
    let client = unreachable_client();

    mount_to(parent.clone(), move || {
        provide_context(client);
        view! { <Dashboard /> }
    });

    let html = parent.inner_html();
    assert!(html.contains("loading-spinner"));
    assert!(!html.contains("Registros"));
    assert!(!html.contains("Velocidad Media"));
    assert!(!html.contains("Panel de Control"));
    assert!(!html.contains("Error al cargar datos"));
}
