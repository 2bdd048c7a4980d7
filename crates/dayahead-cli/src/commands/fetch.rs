use dayahead_core::{RequestWindow, UtcDateTime};

use crate::cli::{Cli, FetchArgs};
use crate::error::CliError;
use crate::output;

use super::PriceQuery;

pub async fn run(cli: &Cli, args: &FetchArgs) -> Result<(), CliError> {
    let query = PriceQuery::from_cli(cli)?;
    let window = resolve_window(args, cli.hours, UtcDateTime::now())?;
    let records = query.fetch(window).await?;

    match &args.output {
        Some(path) => output::write_file(path, &records, args.pretty),
        None => output::write_stdout(&records, args.pretty),
    }
}

/// Explicit `--start`/`--end` override the lookahead from `now`.
fn resolve_window(
    args: &FetchArgs,
    hours: u32,
    now: UtcDateTime,
) -> Result<RequestWindow, CliError> {
    let start = match &args.start {
        Some(raw) => UtcDateTime::parse(raw)?,
        None => now,
    };

    match &args.end {
        Some(raw) => Ok(RequestWindow::new(start, UtcDateTime::parse(raw)?)),
        None => Ok(RequestWindow::lookahead(start, hours)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(start: Option<&str>, end: Option<&str>) -> FetchArgs {
        FetchArgs {
            output: None,
            pretty: false,
            start: start.map(str::to_owned),
            end: end.map(str::to_owned),
        }
    }

    fn ts(input: &str) -> UtcDateTime {
        UtcDateTime::parse(input).expect("valid timestamp")
    }

    #[test]
    fn defaults_to_lookahead_from_now() {
        let now = ts("2016-01-01T14:37:00Z");
        let window = resolve_window(&args(None, None), 24, now).expect("valid window");
        assert_eq!(window.start, now);
        assert_eq!(window.end, ts("2016-01-02T14:37:00Z"));
    }

    #[test]
    fn explicit_bounds_win() {
        let window = resolve_window(
            &args(Some("2016-01-01T05:00:00Z"), Some("2016-01-01T20:00:00Z")),
            24,
            ts("2020-06-01T00:00:00Z"),
        )
        .expect("valid window");
        assert_eq!(window.start, ts("2016-01-01T05:00:00Z"));
        assert_eq!(window.end, ts("2016-01-01T20:00:00Z"));
    }

    #[test]
    fn start_without_end_uses_hours() {
        let window = resolve_window(
            &args(Some("2016-01-01T05:00:00+02:00"), None),
            6,
            ts("2020-06-01T00:00:00Z"),
        )
        .expect("valid window");
        assert_eq!(window.start, ts("2016-01-01T03:00:00Z"));
        assert_eq!(window.end, ts("2016-01-01T09:00:00Z"));
    }

    #[test]
    fn malformed_bound_is_a_validation_error() {
        let error = resolve_window(&args(Some("yesterday"), None), 24, ts("2016-01-01T00:00:00Z"))
            .expect_err("must fail");
        assert!(matches!(error, CliError::Validation(_)));
        assert_eq!(error.exit_code(), 2);
    }
}
