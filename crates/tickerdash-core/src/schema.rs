//! Metric schema registry.
//!
//! One declarative column list per report type, consumed generically by the
//! table and chart projectors. Schemas are static data: lookups are pure
//! and synchronous, and label resolution never fails — an unregistered key
//! falls back to the raw key.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Periodic financial statement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportType {
    IncomeStatement,
    BalanceSheet,
    CashFlowStatement,
}

impl ReportType {
    pub const ALL: [Self; 3] = [
        Self::IncomeStatement,
        Self::BalanceSheet,
        Self::CashFlowStatement,
    ];

    /// Resource-path segment for this report type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomeStatement => "incomeStatement",
            Self::BalanceSheet => "balanceSheet",
            Self::CashFlowStatement => "cashFlowStatement",
        }
    }

    /// Section title shown above the report.
    pub const fn title(self) -> &'static str {
        match self {
            Self::IncomeStatement => "Annual Income Statement",
            Self::BalanceSheet => "Annual Balance Sheet",
            Self::CashFlowStatement => "Annual Cash Flow Statement",
        }
    }

    pub fn schema(self) -> &'static MetricSchema {
        match self {
            Self::IncomeStatement => &INCOME_STATEMENT_SCHEMA,
            Self::BalanceSheet => &BALANCE_SHEET_SCHEMA,
            Self::CashFlowStatement => &CASH_FLOW_SCHEMA,
        }
    }
}

impl Display for ReportType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "incomeStatement" => Ok(Self::IncomeStatement),
            "balanceSheet" => Ok(Self::BalanceSheet),
            "cashFlowStatement" => Ok(Self::CashFlowStatement),
            other => Err(ValidationError::InvalidReportType {
                value: other.to_owned(),
            }),
        }
    }
}

/// One schema column: record key plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricColumn {
    pub key: &'static str,
    pub label: &'static str,
}

/// Ordered column list for one report type.
///
/// The first column is always the fiscal-period identifier; it anchors
/// chart labels and is never itself a selectable chart metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricSchema {
    columns: &'static [MetricColumn],
}

impl MetricSchema {
    pub const fn new(columns: &'static [MetricColumn]) -> Self {
        Self { columns }
    }

    pub const fn columns(&self) -> &'static [MetricColumn] {
        self.columns
    }

    pub const fn len(&self) -> usize {
        self.columns.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Key of the fiscal-period column.
    pub fn period_key(&self) -> &'static str {
        self.columns.first().map_or("", |column| column.key)
    }

    /// Columns eligible as chart metrics (everything but the period column).
    pub fn selectable(&self) -> &'static [MetricColumn] {
        if self.columns.is_empty() {
            self.columns
        } else {
            &self.columns[1..]
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.columns.iter().any(|column| column.key == key)
    }

    pub fn is_selectable(&self, key: &str) -> bool {
        self.selectable().iter().any(|column| column.key == key)
    }

    /// Display label for `key`; unregistered keys fall back to the raw key.
    pub fn label_for<'a>(&self, key: &'a str) -> &'a str {
        self.columns
            .iter()
            .find(|column| column.key == key)
            .map_or(key, |column| column.label)
    }
}

/// Schema returned for tags that name no registered report type.
pub static EMPTY_SCHEMA: MetricSchema = MetricSchema::new(&[]);

/// Resolve a raw report-type tag to its schema.
///
/// Unknown tags resolve to [`EMPTY_SCHEMA`] instead of an error, so
/// callers driven by untrusted strings always get something projectable.
pub fn schema_for(tag: &str) -> &'static MetricSchema {
    tag.parse::<ReportType>()
        .map_or(&EMPTY_SCHEMA, ReportType::schema)
}

const fn column(key: &'static str, label: &'static str) -> MetricColumn {
    MetricColumn { key, label }
}

pub static INCOME_STATEMENT_SCHEMA: MetricSchema = MetricSchema::new(&[
    column("fiscalDateEnding", "Fiscal Year End Date"),
    column("grossProfit", "Gross Profit"),
    column("totalRevenue", "Total Revenue"),
    column("costOfRevenue", "Cost of Revenue"),
    column("costofGoodsAndServicesSold", "Cost of Goods and Services Sold"),
    column("operatingIncome", "Operating Income"),
    column("sellingGeneralAndAdministrative", "Selling, General and Administrative"),
    column("researchAndDevelopment", "Research and Development"),
    column("operatingExpenses", "Operating Expenses"),
    column("investmentIncomeNet", "Investment Income Net"),
    column("netInterestIncome", "Net Interest Income"),
    column("interestIncome", "Interest Income"),
    column("interestExpense", "Interest Expense"),
    column("nonInterestIncome", "Non-Interest Income"),
    column("otherNonOperatingIncome", "Other Non-Operating Income"),
    column("depreciation", "Depreciation"),
    column("depreciationAndAmortization", "Depreciation and Amortization"),
    column("incomeBeforeTax", "Income Before Tax"),
    column("incomeTaxExpense", "Income Tax Expense"),
    column("interestAndDebtExpense", "Interest and Debt Expense"),
    column("netIncomeFromContinuingOperations", "Net Income From Continuing Operations"),
    column("comprehensiveIncomeNetOfTax", "Comprehensive Income Net of Tax"),
    column("ebit", "EBIT"),
    column("ebitda", "EBITDA"),
    column("netIncome", "Net Income"),
]);

pub static BALANCE_SHEET_SCHEMA: MetricSchema = MetricSchema::new(&[
    column("fiscalDateEnding", "Fiscal Year End Date"),
    column("totalAssets", "Total Assets"),
    column("totalCurrentAssets", "Total Current Assets"),
    column("cashAndCashEquivalentsAtCarryingValue", "Cash and Cash Equivalents"),
    column("cashAndShortTermInvestments", "Cash and Short-Term Investments"),
    column("inventory", "Inventory"),
    column("currentNetReceivables", "Current Net Receivables"),
    column("totalNonCurrentAssets", "Total Non-Current Assets"),
    column("propertyPlantEquipment", "Property, Plant and Equipment"),
    column("intangibleAssets", "Intangible Assets"),
    column("goodwill", "Goodwill"),
    column("longTermInvestments", "Long-Term Investments"),
    column("shortTermInvestments", "Short-Term Investments"),
    column("totalLiabilities", "Total Liabilities"),
    column("totalCurrentLiabilities", "Total Current Liabilities"),
    column("currentAccountsPayable", "Current Accounts Payable"),
    column("shortTermDebt", "Short-Term Debt"),
    column("totalNonCurrentLiabilities", "Total Non-Current Liabilities"),
    column("longTermDebt", "Long-Term Debt"),
    column("totalShareholderEquity", "Total Shareholder Equity"),
    column("treasuryStock", "Treasury Stock"),
    column("retainedEarnings", "Retained Earnings"),
    column("commonStock", "Common Stock"),
    column("commonStockSharesOutstanding", "Common Stock Shares Outstanding"),
]);

pub static CASH_FLOW_SCHEMA: MetricSchema = MetricSchema::new(&[
    column("fiscalDateEnding", "Fiscal Year End Date"),
    column("operatingCashflow", "Operating Cashflow"),
    column("paymentsForOperatingActivities", "Payments for Operating Activities"),
    column("proceedsFromOperatingActivities", "Proceeds From Operating Activities"),
    column("changeInOperatingLiabilities", "Change in Operating Liabilities"),
    column("changeInOperatingAssets", "Change in Operating Assets"),
    column("depreciationDepletionAndAmortization", "Depreciation, Depletion and Amortization"),
    column("capitalExpenditures", "Capital Expenditures"),
    column("changeInReceivables", "Change in Receivables"),
    column("changeInInventory", "Change in Inventory"),
    column("profitLoss", "Profit/Loss"),
    column("cashflowFromInvestment", "Cashflow From Investment"),
    column("cashflowFromFinancing", "Cashflow From Financing"),
    column("proceedsFromRepaymentsOfShortTermDebt", "Proceeds From Repayments of Short-Term Debt"),
    column("paymentsForRepurchaseOfCommonStock", "Payments for Repurchase of Common Stock"),
    column("paymentsForRepurchaseOfEquity", "Payments for Repurchase of Equity"),
    column("paymentsForRepurchaseOfPreferredStock", "Payments for Repurchase of Preferred Stock"),
    column("dividendPayout", "Dividend Payout"),
    column("dividendPayoutCommonStock", "Dividend Payout Common Stock"),
    column("dividendPayoutPreferredStock", "Dividend Payout Preferred Stock"),
    column("proceedsFromIssuanceOfCommonStock", "Proceeds From Issuance of Common Stock"),
    column(
        "proceedsFromIssuanceOfLongTermDebtAndCapitalSecuritiesNet",
        "Proceeds From Issuance of Long-Term Debt and Capital Securities Net",
    ),
    column("proceedsFromIssuanceOfPreferredStock", "Proceeds From Issuance of Preferred Stock"),
    column("proceedsFromRepurchaseOfEquity", "Proceeds From Repurchase of Equity"),
    column("proceedsFromSaleOfTreasuryStock", "Proceeds From Sale of Treasury Stock"),
    column("changeInCashAndCashEquivalents", "Change in Cash and Cash Equivalents"),
    column("changeInExchangeRate", "Change in Exchange Rate"),
    column("netIncome", "Net Income"),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_schema_starts_with_the_period_column() {
        for report_type in ReportType::ALL {
            assert_eq!(report_type.schema().period_key(), "fiscalDateEnding");
        }
    }

    #[test]
    fn schema_keys_are_unique() {
        for report_type in ReportType::ALL {
            let schema = report_type.schema();
            let keys: HashSet<&str> = schema.columns().iter().map(|column| column.key).collect();
            assert_eq!(keys.len(), schema.len(), "{report_type} has duplicate keys");
        }
    }

    #[test]
    fn period_column_is_not_selectable() {
        let schema = ReportType::IncomeStatement.schema();
        assert!(!schema.is_selectable("fiscalDateEnding"));
        assert!(schema.is_selectable("netIncome"));
        assert_eq!(schema.selectable().len(), schema.len() - 1);
    }

    #[test]
    fn label_lookup_falls_back_to_raw_key() {
        let schema = ReportType::BalanceSheet.schema();
        assert_eq!(schema.label_for("totalAssets"), "Total Assets");
        assert_eq!(schema.label_for("notARealMetric"), "notARealMetric");
    }

    #[test]
    fn unknown_tags_resolve_to_the_empty_schema() {
        assert_eq!(schema_for("balanceSheet"), &BALANCE_SHEET_SCHEMA);
        let unknown = schema_for("quarterlyEarnings");
        assert!(unknown.is_empty());
        assert_eq!(unknown.label_for("anything"), "anything");
    }

    #[test]
    fn report_type_round_trips_through_path_segment() {
        for report_type in ReportType::ALL {
            let parsed: ReportType = report_type.as_str().parse().expect("segment should parse");
            assert_eq!(parsed, report_type);
        }
        assert!("quarterlyEarnings".parse::<ReportType>().is_err());
    }

    #[test]
    fn section_titles_read_like_headings() {
        assert_eq!(ReportType::IncomeStatement.title(), "Annual Income Statement");
        assert_eq!(ReportType::CashFlowStatement.title(), "Annual Cash Flow Statement");
    }
}
