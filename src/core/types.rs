use serde::Serialize;

use super::error::{ScenarioError, ScenarioResult};

// Rates are percent per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParams {
    pub start_age: u32,
    pub end_age: u32,
    pub invested_percent: f64,
    pub min_invested_monthly: f64,
    pub max_invested_monthly: f64,
    pub return_rate: f64,
    pub inflation_rate: f64,
    pub starting_balance: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            start_age: 20,
            end_age: 65,
            invested_percent: 20.0,
            min_invested_monthly: 500.0,
            max_invested_monthly: 2_000.0,
            return_rate: 6.0,
            inflation_rate: 2.0,
            starting_balance: 0.0,
        }
    }
}

// start_age >= end_age is valid and simulates no working years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    params: ScenarioParams,
}

impl Scenario {
    pub fn new(params: ScenarioParams) -> ScenarioResult<Self> {
        for (name, value) in [
            ("invested_percent", params.invested_percent),
            ("min_invested_monthly", params.min_invested_monthly),
            ("max_invested_monthly", params.max_invested_monthly),
            ("return_rate", params.return_rate),
            ("inflation_rate", params.inflation_rate),
            ("starting_balance", params.starting_balance),
        ] {
            if !value.is_finite() {
                return Err(ScenarioError::NonFiniteParameter { name });
            }
        }

        if params.min_invested_monthly > params.max_invested_monthly {
            return Err(ScenarioError::InconsistentBounds {
                min: params.min_invested_monthly,
                max: params.max_invested_monthly,
            });
        }

        Ok(Self { params })
    }

    pub fn params(&self) -> &ScenarioParams {
        &self.params
    }

    pub fn start_age(&self) -> u32 {
        self.params.start_age
    }

    pub fn end_age(&self) -> u32 {
        self.params.end_age
    }

    pub fn working_years(&self) -> u32 {
        self.params.end_age.saturating_sub(self.params.start_age)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub age: u32,
    pub gross_yearly: f64,
    pub net_yearly: f64,
    pub taxes_yearly: f64,
    pub invested_yearly: f64,
    pub future_value: f64,
    pub running_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub start_age: u32,
    pub end_age: u32,
    pub future_value: f64,
    pub deflator: f64,
    pub present_value: f64,
}
