#![allow(dead_code)]

use dw_client::{DataService, Gateway};
use dw_config::{ClientConfig, DefaultsConfig};

pub const API_KEY: &str = "test-anon-key";
pub const USER_ID: &str = "00000000-0000-0000-0000-0000000000a1";

pub fn create_test_gateway(uri: &str) -> Gateway {
    create_test_gateway_with(uri, &ClientConfig::default())
}

pub fn create_test_gateway_with(uri: &str, settings: &ClientConfig) -> Gateway {
    Gateway::new(uri, "rest/v1", API_KEY, API_KEY, settings).unwrap()
}

pub fn create_test_service(uri: &str) -> DataService {
    DataService::new(create_test_gateway(uri), DefaultsConfig::default())
}

pub fn user_id() -> uuid::Uuid {
    uuid::Uuid::parse_str(USER_ID).unwrap()
}

/// URI of a port nothing listens on, for connection failures
pub fn closed_server_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
