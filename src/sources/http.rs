use reqwest::blocking::Client;
use tracing::debug;

use crate::config::Config;
use crate::domain::FetchRequest;
use crate::errors::ShopResult;
use crate::sources::traits::PageFetcher;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> ShopResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, request: &FetchRequest) -> ShopResult<String> {
        let builder = match request {
            FetchRequest::Form { url, fields } => self.client.post(url).form(fields),
            FetchRequest::Get { url, query } => self.client.get(url).query(query),
        };

        let response = builder.send()?.error_for_status()?;
        debug!(url = %response.url(), status = %response.status(), "fetched page");

        Ok(response.text()?)
    }
}
