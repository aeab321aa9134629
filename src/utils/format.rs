use crate::models::Amount;

/// Indian digit grouping: 1234567 -> "12,34,567"
fn group_indian(mut whole: u64) -> String {
    let last_three = whole % 1000;
    whole /= 1000;
    if whole == 0 {
        return last_three.to_string();
    }

    let mut groups = Vec::new();
    while whole > 0 {
        groups.push(whole % 100);
        whole /= 100;
    }

    let mut out = String::new();
    for (i, group) in groups.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&group.to_string());
        } else {
            out.push_str(&format!("{:02}", group));
        }
        out.push(',');
    }
    out.push_str(&format!("{:03}", last_three));
    out
}

/// "₹12,34,567.89"
pub fn rupees(amount: Amount) -> String {
    let paise = amount.paise();
    format!("₹{}.{:02}", group_indian(paise / 100), paise % 100)
}

/// Revenue in lakhs for the summary card, e.g. "₹4.12L"
pub fn lakhs(amount: Amount) -> String {
    format!("₹{:.2}L", amount.rupees() / 100_000.0)
}

/// Whole rupees without decimals, e.g. "₹5,012"
pub fn rupees_whole(amount: Amount) -> String {
    format!("₹{}", group_indian((amount.paise() + 50) / 100))
}

/// Plain count with Indian grouping
pub fn count(value: u64) -> String {
    group_indian(value)
}
