//! Budget and expense aggregates.

use serde::Serialize;

use yugam_entity::{Budget, Expense};

/// Colour band of the utilization bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationTier {
    /// Below 75 %.
    Green,
    /// 75 % up to 90 %.
    Yellow,
    /// 90 % and above.
    Red,
}

impl UtilizationTier {
    pub fn for_percent(percent: u32) -> Self {
        match percent {
            0..75 => Self::Green,
            75..90 => Self::Yellow,
            _ => Self::Red,
        }
    }

    /// Bar class used by the shell.
    pub fn bar_class(&self) -> &'static str {
        match self {
            Self::Green => "bg-green-500",
            Self::Yellow => "bg-yellow-500",
            Self::Red => "bg-red-500",
        }
    }
}

/// Financial overview of a set of budgets and expenses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Sum of requested amounts.
    pub total_budget: f64,
    /// Sum of approved amounts, each falling back to the requested amount.
    pub total_approved: f64,
    pub total_sponsor_contribution: f64,
    pub total_expenses: f64,
    /// Whole percent of the approved total already spent.
    pub utilization: u32,
    pub tier: UtilizationTier,
    /// Fill class of the utilization bar.
    pub bar_class: &'static str,
    /// Approved total minus expenses; negative when overspent.
    pub remaining: f64,
}

impl BudgetSummary {
    pub fn compute(budgets: &[Budget], expenses: &[Expense]) -> Self {
        let total_budget: f64 = budgets.iter().map(|b| b.amount).sum();
        let total_approved: f64 = budgets.iter().map(Budget::effective_approved).sum();
        let total_sponsor_contribution: f64 = budgets.iter().map(|b| b.sponsor_contribution).sum();
        let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
        Self::from_totals(
            total_budget,
            total_approved,
            total_sponsor_contribution,
            total_expenses,
        )
    }

    pub fn from_totals(
        total_budget: f64,
        total_approved: f64,
        total_sponsor_contribution: f64,
        total_expenses: f64,
    ) -> Self {
        let utilization = utilization_percent(total_expenses, total_approved);
        let tier = UtilizationTier::for_percent(utilization);
        Self {
            total_budget,
            total_approved,
            total_sponsor_contribution,
            total_expenses,
            utilization,
            tier,
            bar_class: tier.bar_class(),
            remaining: total_approved - total_expenses,
        }
    }

    /// Sum two summaries, recomputing the derived fields.
    pub fn merge(&self, other: &Self) -> Self {
        Self::from_totals(
            self.total_budget + other.total_budget,
            self.total_approved + other.total_approved,
            self.total_sponsor_contribution + other.total_sponsor_contribution,
            self.total_expenses + other.total_expenses,
        )
    }
}

impl Default for BudgetSummary {
    fn default() -> Self {
        Self::from_totals(0.0, 0.0, 0.0, 0.0)
    }
}

/// `floor(expenses * 100 / approved)`, 0 when nothing is approved.
fn utilization_percent(expenses: f64, approved: f64) -> u32 {
    if approved <= 0.0 {
        return 0;
    }
    // `as` saturates: negative spend clamps to 0.
    (expenses * 100.0 / approved).floor() as u32
}
