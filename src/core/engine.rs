use std::io::{self, Write};

use tracing::{debug, info, warn};

use super::contribution::bounded_monthly_investment;
use super::error::ScenarioResult;
use super::growth::{cumulative_value, future_value_multiplier, inflation_deflator};
use super::types::{Scenario, ScenarioSummary, YearRecord};
use super::wage::WageFigures;

pub trait YearObserver {
    fn observe(&mut self, record: &YearRecord);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl YearObserver for NoopObserver {
    fn observe(&mut self, _record: &YearRecord) {}
}

impl YearObserver for Vec<YearRecord> {
    fn observe(&mut self, record: &YearRecord) {
        self.push(*record);
    }
}

impl<T: YearObserver + ?Sized> YearObserver for &mut T {
    fn observe(&mut self, record: &YearRecord) {
        (**self).observe(record);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl YearObserver for TracingObserver {
    fn observe(&mut self, record: &YearRecord) {
        debug!(
            age = record.age,
            net = record.net_yearly,
            gross = record.gross_yearly,
            taxes = record.taxes_yearly,
            invested = record.invested_yearly,
            future_value = record.future_value,
            running_total = record.running_total,
            "simulated working year"
        );
    }
}

// The first write failure stops output and is returned by `finish`.
#[derive(Debug)]
pub struct JsonLinesObserver<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_record(&mut self, record: &YearRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write> YearObserver for JsonLinesObserver<W> {
    fn observe(&mut self, record: &YearRecord) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_record(record) {
            warn!(age = record.age, error = %err, "failed to write year trace record");
            self.error = Some(err);
        }
    }
}

pub fn future_value_of_contributions<O: YearObserver + ?Sized>(
    scenario: &Scenario,
    observer: &mut O,
) -> ScenarioResult<f64> {
    let params = scenario.params();
    let end_age = params.end_age;
    let mut total = 0.0;

    for age in params.start_age..end_age {
        let wage = WageFigures::for_age(age);
        let invested_yearly = 12.0
            * bounded_monthly_investment(
                wage.net_yearly / 12.0,
                params.invested_percent,
                params.min_invested_monthly,
                params.max_invested_monthly,
            );
        let future_value =
            invested_yearly * future_value_multiplier(params.return_rate, end_age, age)?;
        total += future_value;

        observer.observe(&YearRecord {
            age,
            gross_yearly: wage.gross_yearly,
            net_yearly: wage.net_yearly,
            taxes_yearly: wage.taxes_yearly,
            invested_yearly,
            future_value,
            running_total: total,
        });
    }

    if params.starting_balance != 0.0 && scenario.working_years() > 0 {
        total += cumulative_value(
            params.starting_balance,
            0.0,
            params.return_rate,
            end_age,
            params.start_age,
        );
    }

    Ok(total)
}

pub fn present_value_of_contributions<O: YearObserver + ?Sized>(
    scenario: &Scenario,
    observer: &mut O,
) -> ScenarioResult<f64> {
    Ok(evaluate(scenario, observer)?.present_value)
}

pub fn evaluate<O: YearObserver + ?Sized>(
    scenario: &Scenario,
    observer: &mut O,
) -> ScenarioResult<ScenarioSummary> {
    let params = scenario.params();
    info!(
        start_age = params.start_age,
        end_age = params.end_age,
        invested_percent = params.invested_percent,
        return_rate = params.return_rate,
        inflation_rate = params.inflation_rate,
        "evaluating scenario"
    );

    let future_value = future_value_of_contributions(scenario, observer)?;
    let deflator = inflation_deflator(params.inflation_rate, params.end_age, params.start_age);
    let present_value = future_value / deflator;

    info!(future_value, deflator, present_value, "scenario evaluated");
    Ok(ScenarioSummary {
        start_age: params.start_age,
        end_age: params.end_age,
        future_value,
        deflator,
        present_value,
    })
}

pub fn yearly_trace(scenario: &Scenario) -> ScenarioResult<Vec<YearRecord>> {
    let mut trace = Vec::with_capacity(scenario.working_years() as usize);
    future_value_of_contributions(scenario, &mut trace)?;
    Ok(trace)
}
