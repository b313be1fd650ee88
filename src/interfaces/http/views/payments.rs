//! Bill payment pages

use super::layout;
use crate::domain::{PaymentMethod, PaymentReceipt};
use crate::support::html::{esc, escape, money};

pub fn payment_form(methods: &[PaymentMethod]) -> String {
    let options: String = methods
        .iter()
        .map(|m| format!("<option value=\"{}\">{}</option>\n", m.id, escape(&m.description)))
        .collect();

    layout(
        "Pay bill",
        &format!(
            r#"<form method="post" action="/bill-payment">
<label>Bill ID <input name="bill_id" type="number" min="1" required></label>
<label>Amount <input name="amount" type="number" min="0.01" step="0.01" required></label>
<label>Payment method <select name="payment_method_id" required>
{options}</select></label>
<button type="submit">Pay</button>
</form>"#
        ),
    )
}

pub fn receipt(receipt: &PaymentReceipt) -> String {
    layout(
        "Payment receipt",
        &format!(
            r#"<table class="summary">
<tr><th>Bill ID</th><td>{bill_id}</td></tr>
<tr><th>Amount paid</th><td>{amount}</td></tr>
<tr><th>Payment method</th><td>{method}</td></tr>
<tr><th>Payment date</th><td>{date}</td></tr>
<tr><th>Status</th><td>{status}</td></tr>
<tr><th>Outstanding amount</th><td>{outstanding}</td></tr>
</table>"#,
            bill_id = receipt.bill_id,
            amount = money(receipt.amount),
            method = escape(&receipt.payment_method_description),
            date = esc(&receipt.payment_date.format("%Y-%m-%d %H:%M:%S UTC")),
            status = escape(&receipt.payment_status),
            outstanding = money(receipt.outstanding_amount),
        ),
    )
}
