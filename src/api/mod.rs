use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing::warn;

use crate::core::{
    JsonLinesObserver, NoopObserver, Scenario, ScenarioParams, ScenarioSummary, TracingObserver,
    evaluate,
};

const SEPARATOR: &str = "------------------------------------------------------";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum TraceMode {
    #[default]
    Off,
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "roi",
    about = "Present value of a lifetime plan investing part of every year's net wage"
)]
pub struct Cli {
    #[arg(
        long,
        value_enum,
        env = "ROI_TRACE",
        default_value_t = TraceMode::Off,
        help = "Per-year diagnostic trace written to stderr"
    )]
    pub trace: TraceMode,
}

pub fn init_logging(mode: TraceMode) {
    let level = match mode {
        TraceMode::Text => LevelFilter::DEBUG,
        TraceMode::Off | TraceMode::Json => LevelFilter::WARN,
    };
    let installed = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
    if let Err(err) = installed {
        warn!(error = %err, "global subscriber already installed");
    }
}

pub fn illustrative_scenario() -> Result<Scenario, String> {
    Scenario::new(ScenarioParams::default()).map_err(|e| e.to_string())
}

pub fn run_scenario<T: Write>(
    scenario: &Scenario,
    mode: TraceMode,
    trace_out: T,
) -> Result<ScenarioSummary, String> {
    match mode {
        TraceMode::Off => evaluate(scenario, &mut NoopObserver).map_err(|e| e.to_string()),
        TraceMode::Text => evaluate(scenario, &mut TracingObserver).map_err(|e| e.to_string()),
        TraceMode::Json => {
            let mut observer = JsonLinesObserver::new(trace_out);
            let summary = evaluate(scenario, &mut observer).map_err(|e| e.to_string())?;
            observer
                .finish()
                .map_err(|e| format!("Failed to write trace: {e}"))?;
            Ok(summary)
        }
    }
}

pub fn render_report(summary: &ScenarioSummary) -> String {
    format!(
        "{SEPARATOR}\nThe total value (in money at present) is: {:.0}\n{SEPARATOR}\n",
        summary.present_value
    )
}

pub fn run_cli(cli: Cli) -> Result<(), String> {
    init_logging(cli.trace);
    let scenario = illustrative_scenario()?;
    let summary = run_scenario(&scenario, cli.trace, io::stderr())?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(render_report(&summary).as_bytes())
        .map_err(|e| format!("Failed to write report: {e}"))
}
