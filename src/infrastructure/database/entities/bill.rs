//! Bill entity: one row per connection and billing month

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Owner of the connection
    pub customer_id: String,

    /// Physical hookup the bill was issued for
    pub connection_id: String,

    /// Billing month (1-12)
    pub month: i32,

    pub year: i32,

    pub customer_name: String,
    pub customer_address: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub connection_type: String,
    pub division: String,
    pub subdivision: String,
    pub installation_date: Option<Date>,
    pub meter_type: String,
    pub issue_date: Date,

    /// Net units consumed during peak hours
    pub net_peak_units: f64,

    /// Net units consumed outside peak hours
    pub net_off_peak_units: f64,

    pub bill_amount: f64,
    pub due_date: Date,
    pub arrears_amount: f64,

    /// Payment status, e.g. "Unpaid", "Paid"
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
