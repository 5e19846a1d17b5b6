//! Calculation pipeline.
//!
//! Runs grade resolution, premiums, taxes, schedule and benefit in order and
//! derives the maintenance rate. [`calculate_sickness_with_audit`] additionally
//! records every rule application as an [`AuditStep`].

use serde_json::json;

use crate::config::RuleSet;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditedCalculation, SicknessInput, SicknessResult};

use super::current_income::{assemble_current_income, calculate_current_income};
use super::maintenance_rate::calculate_maintenance_rate;
use super::payment_schedule::calculate_payment_schedule;
use super::sickness_benefit::calculate_sickness_benefit;
use super::social_insurance::premiums_for_grade;
use super::standard_remuneration::resolve_standard_remuneration;
use super::tax::calculate_tax;

/// Runs the full calculation for a validated input.
///
/// # Errors
///
/// Returns [`EngineError::ZeroNetIncome`](crate::error::EngineError::ZeroNetIncome)
/// when normal net income is zero and the maintenance rate is undefined.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::calculation::calculate_sickness;
/// use sickness_benefit_engine::config::ConfigLoader;
/// use sickness_benefit_engine::models::SicknessInput;
///
/// let rules = ConfigLoader::embedded()?.into_rules();
/// let result = calculate_sickness(&SicknessInput { salary: 300000, period: 6 }, &rules)?;
///
/// assert_eq!(result.current.net_income, 238484);
/// assert_eq!(result.benefit.net_monthly_benefit, 138464);
/// assert_eq!(result.maintenance_rate, 58);
/// # Ok::<(), sickness_benefit_engine::error::EngineError>(())
/// ```
pub fn calculate_sickness(input: &SicknessInput, rules: &RuleSet) -> EngineResult<SicknessResult> {
    let current = calculate_current_income(input.salary, rules);
    let schedule = calculate_payment_schedule(input.period, rules);
    let benefit = calculate_sickness_benefit(input.salary, &schedule, rules);
    let maintenance_rate = calculate_maintenance_rate(&current, &benefit)?;

    Ok(SicknessResult {
        input: *input,
        current,
        benefit,
        schedule,
        maintenance_rate,
    })
}

/// Runs the full calculation and records each rule application.
///
/// Produces the same [`SicknessResult`] as [`calculate_sickness`].
pub fn calculate_sickness_with_audit(
    input: &SicknessInput,
    rules: &RuleSet,
) -> EngineResult<AuditedCalculation> {
    let mut audit = AuditRecorder::default();
    let salary = input.salary;

    let grade = resolve_standard_remuneration(salary, &rules.remuneration.grades);
    audit.record(
        "standard_remuneration_lookup",
        "Standard Monthly Remuneration",
        "健康保険法 第40条",
        json!({ "salary": salary }),
        json!({ "standard_monthly_remuneration": grade }),
        format!("Salary {} falls in the grade of {}", salary, grade),
    );

    let social_insurance = premiums_for_grade(grade, &rules.remuneration);
    audit.record(
        "social_insurance",
        "Social Insurance Premiums",
        "健康保険法 第161条 / 厚生年金保険法 第82条",
        json!({
            "standard_monthly_remuneration": grade,
            "health_rate": rules.remuneration.health_rate.to_string(),
            "pension_rate": rules.remuneration.pension_rate.to_string()
        }),
        json!({
            "health_insurance": social_insurance.health_insurance,
            "pension_insurance": social_insurance.pension_insurance,
            "employment_insurance": social_insurance.employment_insurance,
            "total": social_insurance.total
        }),
        format!(
            "Employee half of {} x {} and {} x {}",
            grade, rules.remuneration.health_rate, grade, rules.remuneration.pension_rate
        ),
    );

    let tax = calculate_tax(salary, &social_insurance, rules);
    audit.record(
        "salary_income_deduction",
        "Salary Income Deduction",
        "所得税法 第28条",
        json!({ "annual_salary": tax.annual_salary }),
        json!({
            "salary_deduction": tax.salary_deduction,
            "salary_income": tax.salary_income
        }),
        format!(
            "Annual salary {} less deduction {} leaves salary income {}",
            tax.annual_salary, tax.salary_deduction, tax.salary_income
        ),
    );
    audit.record(
        "income_tax",
        "Income Tax",
        "所得税法 第89条 / 復興財源確保法 第13条",
        json!({
            "salary_income": tax.salary_income,
            "basic_deduction": rules.tax.basic_deduction,
            "annual_social_insurance": tax.annual_social_insurance,
            "taxable_income": tax.income_tax_base
        }),
        json!({
            "annual_income_tax": tax.annual_income_tax,
            "monthly_income_tax": tax.income_tax
        }),
        format!(
            "Taxable income {} gives {} a year including surtax, {} a month",
            tax.income_tax_base, tax.annual_income_tax, tax.income_tax
        ),
    );
    audit.record(
        "resident_tax",
        "Resident Tax",
        "地方税法 第310条 / 第314条の3",
        json!({
            "salary_income": tax.salary_income,
            "resident_basic_deduction": rules.tax.resident_basic_deduction,
            "annual_social_insurance": tax.annual_social_insurance,
            "taxable_income": tax.resident_tax_base
        }),
        json!({
            "annual_resident_tax": tax.annual_resident_tax,
            "monthly_resident_tax": tax.resident_tax
        }),
        format!(
            "Per-capita {} plus {} of {} gives {} a year, {} a month",
            rules.tax.resident_per_capita,
            rules.tax.resident_rate,
            tax.resident_tax_base,
            tax.annual_resident_tax,
            tax.resident_tax
        ),
    );

    let current = assemble_current_income(salary, social_insurance, &tax);

    let schedule = calculate_payment_schedule(input.period, rules);
    audit.record(
        "payment_schedule",
        "Payment Schedule",
        "健康保険法 第99条第1項",
        json!({ "period_months": input.period }),
        json!({
            "total_days": schedule.total_days,
            "waiting_period_days": schedule.waiting_period_days,
            "actual_payment_days": schedule.actual_payment_days
        }),
        format!(
            "{} days of leave less {} waiting days leaves {} payable days",
            schedule.total_days, schedule.waiting_period_days, schedule.actual_payment_days
        ),
    );

    let benefit = calculate_sickness_benefit(salary, &schedule, rules);
    audit.record(
        "sickness_benefit",
        "Sickness Benefit",
        "健康保険法 第99条第2項",
        json!({
            "standard_monthly_remuneration": benefit.standard_monthly_remuneration,
            "actual_payment_days": schedule.actual_payment_days
        }),
        json!({
            "standard_daily_wage": benefit.standard_daily_wage,
            "benefit_daily_amount": benefit.benefit_daily_amount,
            "total_benefit": benefit.total_benefit,
            "monthly_benefit": benefit.monthly_benefit,
            "net_monthly_benefit": benefit.net_monthly_benefit
        }),
        format!(
            "Daily wage {} x {}/{} = {} a day; {} a month less premiums {} and carried-over taxes {} = {}",
            benefit.standard_daily_wage,
            rules.benefit.benefit_ratio.numerator,
            rules.benefit.benefit_ratio.denominator,
            benefit.benefit_daily_amount,
            benefit.monthly_benefit,
            benefit.social_insurance.total,
            benefit.income_tax + benefit.resident_tax,
            benefit.net_monthly_benefit
        ),
    );

    let maintenance_rate = calculate_maintenance_rate(&current, &benefit)?;
    audit.record(
        "maintenance_rate",
        "Maintenance Rate",
        "収入維持率",
        json!({
            "net_monthly_benefit": benefit.net_monthly_benefit,
            "net_income": current.net_income
        }),
        json!({ "maintenance_rate": maintenance_rate }),
        format!(
            "{} / {} x 100 rounds to {}%",
            benefit.net_monthly_benefit, current.net_income, maintenance_rate
        ),
    );

    Ok(AuditedCalculation {
        result: SicknessResult {
            input: *input,
            current,
            benefit,
            schedule,
            maintenance_rate,
        },
        steps: audit.into_steps(),
    })
}

#[derive(Debug, Default)]
struct AuditRecorder {
    steps: Vec<AuditStep>,
}

impl AuditRecorder {
    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        basis: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            basis: basis.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn into_steps(self) -> Vec<AuditStep> {
        self.steps
    }
}
