//! Freedom-fund display formatting

use super::format_money;
use crate::config::policy::FreedomPolicy;
use crate::models::{FreedomFundResult, Region};

/// Format a freedom-fund estimate with its verdict
pub fn format_freedom_result(
    result: &FreedomFundResult,
    wage: f64,
    region: Region,
    policy: &FreedomPolicy,
    symbol: &str,
) -> String {
    let money = |v: f64| format_money(symbol, v);
    let mut output = String::new();

    output.push_str(&format!(
        "Freedom fund goal ({} months): {}\n",
        policy.safety_months,
        money(result.total_goal)
    ));
    output.push_str(&format!("{}\n", "=".repeat(48)));
    output.push_str(&format!("  {:<28} {:>16}\n", "Region", region.to_string()));
    output.push_str(&format!("  {:<28} {:>16}\n", "Rent", money(result.rent_cost)));
    output.push_str(&format!(
        "  {:<28} {:>16}\n",
        "Monthly costs (minimum)",
        money(result.monthly_survival_budget)
    ));
    output.push_str(&format!("  {:<28} {:>16}\n", "Moving costs", money(result.moving_costs)));
    output.push_str(&format!(
        "  {:<28} {:>16}\n",
        "Emergency fund",
        money(result.emergency_fund)
    ));
    output.push('\n');

    if result.can_afford_monthly {
        output.push_str(&format!(
            "Your wage covers the cost of living.\n\
             With {} a month you can cover {} in costs and have {} left to save.\n",
            money(wage),
            money(result.monthly_survival_budget),
            money(result.monthly_surplus())
        ));
        if let Some(months) = result.months_to_goal() {
            output.push_str(&format!(
                "Saving all of it, you would reach the goal in {} months.\n",
                months
            ));
        }
    } else {
        output.push_str(&format!(
            "Warning: your wage does not cover the minimum costs.\n\
             Estimated costs ({}) are higher than your wage; you are short about {} a month.\n\
             Look for support from organisations or another source of income before leaving.\n",
            money(result.monthly_survival_budget),
            money(result.monthly_gap.abs())
        ));
    }

    output
}

/// Format month-by-month savings towards the goal
pub fn format_savings_projection(result: &FreedomFundResult, symbol: &str) -> String {
    let Some(months) = result.months_to_goal() else {
        return "No monthly surplus to save from.\n".to_string();
    };

    let mut output = format!("Savings plan towards {}\n", format_money(symbol, result.total_goal));
    for point in result.savings_projection(months) {
        let label = if point.month == 0 {
            "Start".to_string()
        } else {
            format!("M{}", point.month)
        };
        output.push_str(&format!("  {:<6} {:>14}\n", label, format_money(symbol, point.saved)));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::estimate;

    #[test]
    fn test_affordable_verdict() {
        let policy = FreedomPolicy::default();
        let result = estimate(700.0, 0, true, &policy).unwrap();
        let output = format_freedom_result(&result, 700.0, Region::Capital, &policy, "€");

        assert!(output.contains("€3,660.00"));
        assert!(output.contains("covers the cost of living"));
        assert!(output.contains("€200.00 left to save"));
        assert!(output.contains("19 months"));
    }

    #[test]
    fn test_shortfall_verdict() {
        let policy = FreedomPolicy::default();
        let result = estimate(300.0, 2, false, &policy).unwrap();
        let output = format_freedom_result(&result, 300.0, Region::Other, &policy, "€");

        assert!(output.contains("does not cover"));
        assert!(output.contains("short about €280.00"));
    }

    #[test]
    fn test_projection() {
        let policy = FreedomPolicy::default();
        let result = estimate(700.0, 0, true, &policy).unwrap();
        let output = format_savings_projection(&result, "€");
        assert!(output.contains("Start"));
        assert!(output.contains("M19"));

        let short = estimate(300.0, 2, false, &policy).unwrap();
        assert!(format_savings_projection(&short, "€").contains("No monthly surplus"));
    }
}
