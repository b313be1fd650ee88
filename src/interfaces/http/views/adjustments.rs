//! Bill adjustment pages

use super::layout;
use crate::domain::AdjustmentRequest;
use crate::support::html::{escape, money};

pub fn adjustment_form() -> String {
    layout(
        "Adjust bill",
        r#"<form method="post" action="/bill-adjustments">
<label>Bill ID <input name="bill_id" type="number" min="1" required></label>
<label>Officer name <input name="officer_name" required maxlength="100"></label>
<label>Officer designation <input name="officer_designation" required maxlength="100"></label>
<label>Original bill amount <input name="original_bill_amount" type="number" min="0" step="0.01" required></label>
<label>Adjustment amount <input name="adjustment_amount" type="number" step="0.01" required></label>
<label>Reason <textarea name="adjustment_reason" required maxlength="500"></textarea></label>
<button type="submit">Submit adjustment</button>
</form>"#,
    )
}

pub fn adjustment_not_implemented(request: &AdjustmentRequest) -> String {
    layout(
        "Adjustment not available",
        &format!(
            "<p class=\"notice\">Bill adjustments are not available yet. \
             The requested adjustment of {} on bill {} by {} was not applied.</p>",
            money(request.adjustment_amount),
            request.bill_id,
            escape(&request.officer_name)
        ),
    )
}
