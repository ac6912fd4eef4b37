mod contribution;
mod engine;
mod error;
mod growth;
mod types;
mod wage;

pub use contribution::bounded_monthly_investment;
pub use engine::{
    JsonLinesObserver, NoopObserver, TracingObserver, YearObserver, evaluate,
    future_value_of_contributions, present_value_of_contributions, yearly_trace,
};
pub use error::{ScenarioError, ScenarioResult};
pub use growth::{cumulative_value, future_value_multiplier, inflation_deflator};
pub use types::{Scenario, ScenarioParams, ScenarioSummary, YearRecord};
pub use wage::{
    CAREER_START_AGE, WageFigures, gross_monthly_wage, gross_yearly_wage, net_monthly_wage,
    net_yearly_wage, seniority, taxes_yearly,
};
