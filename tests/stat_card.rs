//! DOM-level rendering tests, run under wasm-pack / wasm-bindgen-test.

#![cfg(target_arch = "wasm32")]

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use vento_ui::components::{StatCard, Trend};

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

#[wasm_bindgen_test]
fn stat_card_renders_value_and_unit_without_trend() {
    let parent = mount_host();

    mount_to(parent.clone(), || {
        view! { <StatCard title="Velocidad Media" value="--" unit="m/s" icon="🌬" /> }
    });

    let html = parent.inner_html();
    assert!(html.contains("Velocidad Media"));
    assert!(html.contains("--"));
    assert!(html.contains("m/s"));
    assert!(!html.contains("vs mes anterior"));
}

#[wasm_bindgen_test]
fn stat_card_renders_negative_trend_line() {
    let parent = mount_host();
    let trend = Trend {
        value: 5.0,
        is_positive: false,
    };

    mount_to(parent.clone(), || {
        view! { <StatCard title="Registros" value="1,234" unit="datos" icon="📈" trend=trend /> }
    });

    let html = parent.inner_html();
    assert!(html.contains("1,234"));
    assert!(html.contains("↓ 5% vs mes anterior"));
}
