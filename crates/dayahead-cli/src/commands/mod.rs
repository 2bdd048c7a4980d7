mod domains;
mod fetch;
mod publish;

use std::sync::Arc;

use dayahead_core::{
    ApiToken, DocumentFetcher, DomainCode, FetcherConfig, PriceRecord, PricePipeline,
    ReqwestHttpClient, RequestWindow, Vat,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Fetch(args) => fetch::run(cli, args).await,
        Command::Publish(args) => publish::run(cli, args).await,
        Command::Domains => domains::run(),
    }
}

/// Validated global options shared by the commands that hit the API.
struct PriceQuery {
    token: ApiToken,
    domain: DomainCode,
    vat: Vat,
    pipeline: PricePipeline,
}

impl PriceQuery {
    fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let token = ApiToken::new(cli.token.as_deref().ok_or(CliError::MissingToken)?)?;
        let domain = DomainCode::parse(&cli.domain)?;
        let vat = Vat::new(cli.vat)?;

        let config = FetcherConfig {
            base_url: cli.base_url.clone(),
            timeout_ms: cli.timeout_ms,
        };
        let fetcher = DocumentFetcher::new(Arc::new(ReqwestHttpClient::new()), config);

        Ok(Self {
            token,
            domain,
            vat,
            pipeline: PricePipeline::new(fetcher),
        })
    }

    async fn fetch(&self, window: RequestWindow) -> Result<Vec<PriceRecord>, CliError> {
        tracing::info!(
            domain = %self.domain,
            start = %window.start,
            end = %window.end,
            vat = self.vat.rate(),
            "fetching day-ahead prices"
        );
        let records = self
            .pipeline
            .fetch_prices(&self.token, &self.domain, window, self.vat)
            .await?;
        Ok(records)
    }
}
