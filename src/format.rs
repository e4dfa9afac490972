//! Text formatting for terminal output
//!
//! Currency is shown in whole dollars with thousands separators. All rendering
//! lives here so the calculators only return numbers.

use crate::amortization::{DebtPayoff, LoanSchedule};
use crate::request::{
    CalculationResponse, DebtPayoffReport, InterestReport, RewardReport, ScoreReport,
};
use crate::credit::{Factor, Utilization};

/// Format as whole dollars, e.g. `$12,346` or `-$50`
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Format a percentage with the given number of decimals, e.g. `25.0%`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render any calculation result as text
pub fn format_response(response: &CalculationResponse) -> String {
    match response {
        CalculationResponse::Score(report) => format_score(report),
        CalculationResponse::Utilization(util) => format_utilization(util),
        CalculationResponse::Interest(report) => format_interest(report),
        CalculationResponse::DebtPayoff(report) => format_debt_payoff(report),
        CalculationResponse::LoanSchedule(loan) => format_loan_schedule(loan),
        CalculationResponse::Rewards(report) => format_rewards(report),
    }
}

pub fn format_score(report: &ScoreReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Credit score: {} ({})\n", report.score, report.band));
    out.push_str(&format!("Gauge: {}\n", format_percent(report.progress * 100.0, 0)));
    for factor in Factor::ALL {
        out.push_str(&format!(
            "  {:<22} {:>5.1}  weight {:>2}%\n",
            factor.label(),
            report.factors.get(factor),
            factor.weight_percent()
        ));
    }
    out
}

pub fn format_utilization(util: &Utilization) -> String {
    format!(
        "Utilization: {} ({})\n",
        format_percent(util.percent, 1),
        util.tier
    )
}

pub fn format_interest(report: &InterestReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Interest ({}): {}\n", report.inputs.mode, report.formula));
    out.push_str(&format!("Final amount:     {}\n", format_currency(report.result.final_amount)));
    out.push_str(&format!("Interest earned:  {}\n", format_currency(report.result.interest_earned)));
    out.push_str(&format!("Total return:     {}\n", format_percent(report.total_return_percent, 1)));
    out.push_str(&format!("Avg monthly gain: {}\n", format_currency(report.average_monthly_gain)));
    out
}

pub fn format_debt_payoff(report: &DebtPayoffReport) -> String {
    let mut out = String::new();
    match &report.payoff {
        DebtPayoff::Amortizing(plan) => {
            let duration = report
                .duration
                .clone()
                .unwrap_or_else(|| plan.duration().to_string());
            out.push_str(&format!("Payoff time:    {} ({} months)\n", duration, plan.months));
            out.push_str(&format!("Total paid:     {}\n", format_currency(plan.total_paid)));
            out.push_str(&format!("Total interest: {}\n", format_currency(plan.total_interest)));
        }
        DebtPayoff::NonAmortizing {
            minimum_interest_payment,
        } => {
            out.push_str("Payment does not cover the monthly interest; the debt never pays off.\n");
            out.push_str(&format!(
                "Pay more than {} per month to make progress.\n",
                format_currency(*minimum_interest_payment)
            ));
        }
    }

    if let Some(timeline) = &report.timeline {
        out.push('\n');
        out.push_str(&format!("{:>5} {:>12}\n", "Month", "Balance"));
        for record in &timeline.records {
            out.push_str(&format!(
                "{:>5} {:>12}\n",
                record.month,
                format_currency(record.remaining_balance)
            ));
        }
        if timeline.truncated {
            out.push_str("(timeline truncated)\n");
        }
    }
    out
}

pub fn format_loan_schedule(loan: &LoanSchedule) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Loan {} at {} over {} months\n",
        format_currency(loan.loan_amount),
        format_percent(loan.annual_rate_percent, 2),
        loan.term_months
    ));
    out.push_str(&format!("Monthly payment: ${:.2}\n", loan.monthly_payment));
    out.push_str(&format!("Total interest:  {}\n", format_currency(loan.total_interest)));
    out.push_str(&format!("Total paid:      {}\n\n", format_currency(loan.total_paid)));

    out.push_str(&format!(
        "{:>5} {:>10} {:>10} {:>10} {:>12}\n",
        "Month", "Payment", "Principal", "Interest", "Balance"
    ));
    for r in &loan.schedule.records {
        out.push_str(&format!(
            "{:>5} {:>10.2} {:>10.2} {:>10.2} {:>12.2}\n",
            r.month, r.payment, r.principal_portion, r.interest_portion, r.remaining_balance
        ));
    }
    out
}

pub fn format_rewards(report: &RewardReport) -> String {
    let mut out = String::new();
    let best_index = report.optimization.best_index;
    for (i, profile) in report.optimization.per_profile.iter().enumerate() {
        let marker = if i == best_index { "*" } else { " " };
        out.push_str(&format!(
            "{marker} {:<16} {:>8}/month {:>8}/year\n",
            profile.name,
            format_currency(profile.monthly_reward),
            format_currency(profile.annual_reward)
        ));
    }
    out.push_str(&format!(
        "\nBest card: {} ({} effective on {} monthly spend)\n",
        report.optimization.best,
        format_percent(report.effective_rate_percent, 2),
        format_currency(report.total_spending)
    ));
    out
}
