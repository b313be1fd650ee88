//! Bill retrieval pages

use super::{layout, month_name};
use crate::domain::{BillDetails, BillKey};
use crate::support::html::{esc, esc_opt, escape, money};

pub fn retrieval_form() -> String {
    layout(
        "View bill",
        r#"<form method="post" action="/bill-retrieval">
<label>Customer ID <input name="customer_id" required maxlength="64"></label>
<label>Connection ID <input name="connection_id" required maxlength="64"></label>
<label>Month <input name="month" type="number" min="1" max="12" required></label>
<label>Year <input name="year" type="number" min="1900" max="2100" required></label>
<button type="submit">Retrieve bill</button>
</form>"#,
    )
}

pub fn bill_not_found(key: &BillKey) -> String {
    layout(
        "Bill not found",
        &format!(
            "<p class=\"notice\">No bill found for connection {} for {} {}.</p>\n<p><a href=\"/bill-retrieval\">Try another bill</a></p>",
            escape(&key.connection_id),
            month_name(key.month),
            key.year
        ),
    )
}

fn row(label: &str, value: String) -> String {
    format!("<tr><th>{}</th><td>{}</td></tr>\n", label, value)
}

pub fn bill_details(details: &BillDetails) -> String {
    let bill = &details.bill;

    let mut summary = String::new();
    summary.push_str(&row("Customer ID", escape(&details.customer_id)));
    summary.push_str(&row("Name", escape(&bill.customer_name)));
    summary.push_str(&row("Address", escape(&bill.customer_address)));
    summary.push_str(&row("Phone", esc_opt(&bill.customer_phone)));
    summary.push_str(&row("Email", esc_opt(&bill.customer_email)));
    summary.push_str(&row("Connection ID", escape(&bill.connection_id)));
    summary.push_str(&row("Connection type", escape(&bill.connection_type)));
    summary.push_str(&row("Division", escape(&bill.division)));
    summary.push_str(&row("Subdivision", escape(&bill.subdivision)));
    summary.push_str(&row("Installation date", esc_opt(&bill.installation_date)));
    summary.push_str(&row("Meter type", escape(&bill.meter_type)));
    summary.push_str(&row(
        "Billing month",
        format!("{} {}", month_name(bill.month), bill.year),
    ));
    summary.push_str(&row("Issue date", esc(&bill.issue_date)));
    summary.push_str(&row("Due date", esc(&bill.due_date)));
    summary.push_str(&row("Peak units", money(bill.net_peak_units)));
    summary.push_str(&row("Off-peak units", money(bill.net_off_peak_units)));
    summary.push_str(&row("Arrears", money(bill.arrears_amount)));
    summary.push_str(&row("Fixed fees", money(details.fixed_fee_amount())));
    summary.push_str(&row("Taxes", money(details.tax_amount())));
    summary.push_str(&row("Amount payable", money(bill.bill_amount)));
    summary.push_str(&row(
        "Amount after due date",
        money(details.amount_after_due_date()),
    ));

    let tariffs: String = details
        .tariffs
        .iter()
        .map(|t| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&t.name),
                money(t.units),
                money(t.rate),
                money(t.amount)
            )
        })
        .collect();

    let taxes: String = details
        .taxes
        .iter()
        .map(|t| format!("<tr><td>{}</td><td>{}</td></tr>\n", escape(&t.name), money(t.amount)))
        .collect();

    let subsidies: String = details
        .subsidies
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&s.name),
                escape(&s.provider_name),
                money(s.rate_per_unit)
            )
        })
        .collect();

    let fixed_fees: String = details
        .fixed_fees
        .iter()
        .map(|f| format!("<tr><td>{}</td><td>{}</td></tr>\n", escape(&f.name), money(f.amount)))
        .collect();

    let history: String = details
        .previous_bills
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{} {}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                month_name(p.month),
                p.year,
                money(p.amount),
                esc(&p.due_date),
                escape(&p.status)
            )
        })
        .collect();

    let content = format!(
        r#"<table class="summary">
{summary}</table>
<h2>Tariffs</h2>
<table>
<tr><th>Tariff</th><th>Units</th><th>Rate</th><th>Amount</th></tr>
{tariffs}</table>
<h2>Taxes</h2>
<table>
<tr><th>Tax</th><th>Amount</th></tr>
{taxes}</table>
<h2>Subsidies</h2>
<table>
<tr><th>Subsidy</th><th>Provider</th><th>Rate per unit</th></tr>
{subsidies}</table>
<h2>Fixed fees</h2>
<table>
<tr><th>Fee</th><th>Amount</th></tr>
{fixed_fees}</table>
<h2>Previous bills</h2>
<table>
<tr><th>Month</th><th>Amount</th><th>Due date</th><th>Status</th></tr>
{history}</table>"#
    );

    layout("Bill details", &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bill::fixtures::{bill_for_month, sample_bill};
    use crate::domain::{PriorBill, TaxLine};

    fn details() -> BillDetails {
        let prior = bill_for_month(2, 2024, 4100.0);
        BillDetails {
            customer_id: "CUST-1".into(),
            bill: sample_bill(),
            tariffs: vec![],
            taxes: vec![TaxLine { name: "GST".into(), amount: 150.0 }],
            subsidies: vec![],
            fixed_fees: vec![],
            previous_bills: vec![PriorBill {
                month: prior.month,
                year: prior.year,
                amount: prior.bill_amount,
                issue_date: prior.issue_date,
                due_date: prior.due_date,
                status: prior.status,
            }],
        }
    }

    #[test]
    fn renders_header_and_history() {
        let page = bill_details(&details());
        assert!(page.contains("<th>Amount payable</th><td>5400.00</td>"));
        assert!(page.contains("<td>GST</td><td>150.00</td>"));
        assert!(page.contains("<td>February 2024</td><td>4100.00</td>"));
        assert!(page.contains("<th>Email</th><td>-</td>"));
    }

    #[test]
    fn stored_text_is_escaped() {
        let mut d = details();
        d.bill.customer_name = "<script>alert(1)</script>".into();
        let page = bill_details(&d);
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn not_found_names_the_period() {
        let page = bill_not_found(&BillKey::new("CONN-<9>", 3, 2024));
        assert!(page.contains("No bill found for connection CONN-&lt;9&gt; for March 2024."));
    }
}
