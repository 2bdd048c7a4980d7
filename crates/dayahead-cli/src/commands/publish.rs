use dayahead_core::{RequestWindow, UtcDateTime};

use crate::cli::{Cli, PublishArgs};
use crate::error::CliError;
use crate::output;
use crate::publish::{self as mqtt, BrokerConfig};

use super::PriceQuery;

pub async fn run(cli: &Cli, args: &PublishArgs) -> Result<(), CliError> {
    let query = PriceQuery::from_cli(cli)?;
    let window = RequestWindow::lookahead(UtcDateTime::now(), cli.hours);
    let records = query.fetch(window).await?;

    if let Some(path) = &args.output {
        output::write_file(path, &records, false)?;
    }

    let messages = mqtt::build_messages(&args.prefix, &query.domain, &records)?;
    let broker = BrokerConfig {
        host: args.broker.clone(),
        port: args.port,
        timeout_ms: cli.timeout_ms,
    };
    mqtt::publish(&broker, messages).await?;
    Ok(())
}
