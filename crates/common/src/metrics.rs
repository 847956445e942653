//! Process-wide Prometheus registry.
//!
//! Counters are registered lazily on first use; `render` produces the text
//! exposition served on `/metrics`.

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

pub static MENUS_CREATED: Lazy<IntCounter> = Lazy::new(|| {
    let c = IntCounter::new("kitchenpos_menus_created_total", "Menus persisted")
        .expect("valid counter definition");
    REGISTRY.register(Box::new(c.clone())).expect("register menus_created");
    c
});

pub static MENU_REJECTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    let c = IntCounterVec::new(
        Opts::new("kitchenpos_menu_rejections_total", "Menu creation requests rejected by validation"),
        &["reason"],
    )
    .expect("valid counter definition");
    REGISTRY.register(Box::new(c.clone())).expect("register menu_rejections");
    c
});

pub fn record_menu_created() {
    MENUS_CREATED.inc();
}

pub fn record_menu_rejected(reason: &str) {
    MENU_REJECTIONS.with_label_values(&[reason]).inc();
}

/// Encode every registered metric in the Prometheus text format.
pub fn render() -> (StatusCode, String) {
    // touch the lazies so the families show up before the first event
    Lazy::force(&MENUS_CREATED);
    Lazy::force(&MENU_REJECTIONS);

    let mut buf = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buf) {
        return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    }
    match String::from_utf8(buf) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
