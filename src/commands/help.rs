/// Command reference printed by `help`
pub fn execute() -> String {
    [
        "HyperPay Analytics - commands",
        "",
        "Views",
        "  overview               Summary cards, weekly volume, payment methods, recent transactions",
        "  transactions | tx      Current page of the filtered transaction table",
        "  analytics              Hourly volume, status distribution, top merchants, KPIs",
        "  live                   Current live success rate",
        "  snapshot               Full view-model as JSON",
        "",
        "Filters (each resets to page 1)",
        "  search <text>          Match merchant name or transaction id",
        "  status <STATUS|ALL>    SUCCESS, FAILED, PENDING, REFUNDED",
        "  method <METHOD|ALL>    UPI, Card, NetBanking, Wallet, BNPL",
        "  clear                  Remove all filters",
        "",
        "Pages",
        "  page <n> | next | prev",
        "",
        "  help | quit",
    ]
    .join("\n")
}
