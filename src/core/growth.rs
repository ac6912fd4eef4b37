use super::error::{ScenarioError, ScenarioResult};

fn periods_between(end: u32, start: u32) -> i32 {
    let periods = i64::from(end) - i64::from(start);
    i32::try_from(periods).unwrap_or(if periods < 0 { i32::MIN } else { i32::MAX })
}

pub fn future_value_multiplier(
    change_per_period: f64,
    end: u32,
    start: u32,
) -> ScenarioResult<f64> {
    if end <= start {
        return Err(ScenarioError::InvalidRange { start, end });
    }
    Ok((1.0 + change_per_period / 100.0).powi(periods_between(end, start)))
}

// Unchecked range: empty gives 1, reversed gives a fractional deflator.
pub fn inflation_deflator(inflation_rate: f64, end: u32, start: u32) -> f64 {
    (1.0 + inflation_rate / 100.0).powi(periods_between(end, start))
}

// Contributions land at the start of each period.
pub fn cumulative_value(
    start_amount: f64,
    periodic_contribution: f64,
    return_rate: f64,
    end: u32,
    start: u32,
) -> f64 {
    let growth = 1.0 + return_rate / 100.0;
    (start..end).fold(start_amount, |amount, _| {
        (amount + periodic_contribution) * growth
    })
}
