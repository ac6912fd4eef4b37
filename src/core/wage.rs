use serde::Serialize;

pub const CAREER_START_AGE: u32 = 22;

// Single-jurisdiction approximation of personal income tax. Not tax law.
const MUNICIPAL_RATE: f64 = 0.069;
const PROFESSIONAL_EXPENSE_DEDUCTION: f64 = 0.102216;
const BASE_RATE: f64 = 0.3569;
const TAX_FREE_ALLOWANCE: f64 = 7090.0;
const ALLOWANCE_REDUCTION: f64 = 0.25;

// (seniority upper bound in years, gross monthly wage)
const SENIORITY_STEPS: [(u32, f64); 4] = [(2, 2700.0), (5, 3000.0), (10, 3900.0), (20, 5200.0)];
const SENIOR_MONTHLY_WAGE: f64 = 6500.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WageFigures {
    pub gross_monthly: f64,
    pub gross_yearly: f64,
    pub taxes_yearly: f64,
    pub net_yearly: f64,
    pub net_monthly: f64,
}

impl WageFigures {
    pub fn for_age(age: u32) -> Self {
        let gross_monthly = gross_monthly_wage(age);
        let gross_yearly = 12.0 * gross_monthly;
        let taxes_yearly = taxes_on_gross_yearly(gross_yearly);
        let net_yearly = gross_yearly - taxes_yearly;
        Self {
            gross_monthly,
            gross_yearly,
            taxes_yearly,
            net_yearly,
            net_monthly: net_yearly / 12.0,
        }
    }
}

pub fn seniority(age: u32) -> u32 {
    age.saturating_sub(CAREER_START_AGE)
}

pub fn gross_monthly_wage(age: u32) -> f64 {
    let years = seniority(age);
    SENIORITY_STEPS
        .iter()
        .find(|(upper, _)| years < *upper)
        .map(|(_, wage)| *wage)
        .unwrap_or(SENIOR_MONTHLY_WAGE)
}

pub fn gross_yearly_wage(age: u32) -> f64 {
    12.0 * gross_monthly_wage(age)
}

fn taxes_on_gross_yearly(gross_yearly: f64) -> f64 {
    let taxable = gross_yearly * (1.0 - PROFESSIONAL_EXPENSE_DEDUCTION);
    (1.0 + MUNICIPAL_RATE) * (taxable * BASE_RATE - TAX_FREE_ALLOWANCE * ALLOWANCE_REDUCTION)
}

pub fn taxes_yearly(age: u32) -> f64 {
    taxes_on_gross_yearly(gross_yearly_wage(age))
}

pub fn net_yearly_wage(age: u32) -> f64 {
    let gross = gross_yearly_wage(age);
    gross - taxes_on_gross_yearly(gross)
}

pub fn net_monthly_wage(age: u32) -> f64 {
    net_yearly_wage(age) / 12.0
}
