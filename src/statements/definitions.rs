// src/statements/definitions.rs

/// Shape of one output report: an ordered list of display labels and the
/// fully-qualified "taxonomy:concept" keys backing them.
#[derive(Debug, Clone, Copy)]
pub struct StatementDefinition {
    /// Report name, used as the output filename suffix.
    pub name: &'static str,
    /// (display label, "taxonomy:concept") pairs in presentation order.
    pub line_items: &'static [(&'static str, &'static str)],
}

pub const INCOME_STATEMENT: StatementDefinition = StatementDefinition {
    name: "income_statement",
    line_items: &[
        ("Revenue", "us-gaap:Revenues"),
        ("Cost of Revenue", "us-gaap:CostOfRevenue"),
        ("Gross Profit", "us-gaap:GrossProfit"),
        ("Operating Expenses", "us-gaap:OperatingExpenses"),
        ("Operating Income", "us-gaap:OperatingIncomeLoss"),
        ("Net Income", "us-gaap:NetIncomeLoss"),
    ],
};

pub const CASH_FLOW_STATEMENT: StatementDefinition = StatementDefinition {
    name: "cash_flow_statement",
    line_items: &[
        (
            "Cash from Operating Activities",
            "us-gaap:NetCashProvidedByUsedInOperatingActivities",
        ),
        (
            "Cash from Investing Activities",
            "us-gaap:NetCashProvidedByUsedInInvestingActivities",
        ),
        (
            "Cash from Financing Activities",
            "us-gaap:NetCashProvidedByUsedInFinancingActivities",
        ),
        ("Net Change in Cash", "us-gaap:NetIncreaseDecreaseInCash"),
    ],
};

pub const BALANCE_SHEET: StatementDefinition = StatementDefinition {
    name: "balance_sheet",
    line_items: &[
        ("Total Assets", "us-gaap:Assets"),
        ("Total Liabilities", "us-gaap:Liabilities"),
        ("Total Equity", "us-gaap:StockholdersEquity"),
        (
            "Cash and Cash Equivalents",
            "us-gaap:CashAndCashEquivalentsAtCarryingValue",
        ),
        ("Total Current Assets", "us-gaap:AssetsCurrent"),
        ("Total Current Liabilities", "us-gaap:LiabilitiesCurrent"),
    ],
};

/// The three reports produced for every filing, in output order.
pub const ALL_STATEMENTS: [StatementDefinition; 3] =
    [INCOME_STATEMENT, CASH_FLOW_STATEMENT, BALANCE_SHEET];
