#![allow(dead_code)]

use order_service::config::Config;
use order_service::server::{build_container, build_state};
use order_service::state::AppState;

pub const TEST_BASE_URL: &str = "http://orders.test";

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        base_url: TEST_BASE_URL.to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}

/// State over the stub capabilities, wired the same way the server wires it.
pub fn create_test_state() -> AppState {
    let container = build_container();
    build_state(&container, &test_config()).expect("container provides every capability")
}
