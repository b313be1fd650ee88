//! Shared test data for bill tests across layers

use chrono::NaiveDate;

use super::model::Bill;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Bill for `CONN-1`, March 2024, owned by `CUST-1`.
pub(crate) fn sample_bill() -> Bill {
    Bill {
        customer_id: "CUST-1".into(),
        connection_id: "CONN-1".into(),
        month: 3,
        year: 2024,
        customer_name: "Ayesha Khan".into(),
        customer_address: "12 Canal Road".into(),
        customer_phone: Some("0300-1234567".into()),
        customer_email: None,
        connection_type: "Residential".into(),
        division: "North".into(),
        subdivision: "N-2".into(),
        installation_date: Some(date(2019, 5, 1)),
        meter_type: "Single Phase".into(),
        issue_date: date(2024, 4, 1),
        net_peak_units: 120.0,
        net_off_peak_units: 80.0,
        bill_amount: 5400.0,
        due_date: date(2024, 4, 15),
        arrears_amount: 0.0,
        status: "Unpaid".into(),
    }
}

/// Same customer and connection as [`sample_bill`], for another month.
/// The issue date is the first day of the following month.
pub(crate) fn bill_for_month(month: u32, year: i32, amount: f64) -> Bill {
    let (issue_year, issue_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    Bill {
        month,
        year,
        bill_amount: amount,
        issue_date: date(issue_year, issue_month, 1),
        due_date: date(issue_year, issue_month, 15),
        status: "Paid".into(),
        ..sample_bill()
    }
}
