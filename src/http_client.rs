use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::error::FetchError;

const USER_AGENT: &str = concat!("depth_chart_guess/", env!("CARGO_PKG_VERSION"));

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client, FetchError> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| FetchError::Network(format!("failed to build http client: {err}")))
    })
}
