mod commands;

use crate::api::HetznerClient;
use wiremock::MockServer;

pub(crate) const TOKEN: &str = "test-token";

pub(crate) fn client_for(server: &MockServer) -> HetznerClient {
    HetznerClient::with_base_url(TOKEN.to_string(), &server.uri()).unwrap()
}
