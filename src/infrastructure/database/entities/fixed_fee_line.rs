//! Fixed fee line entity (meter rent, service charges)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fixed_fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub connection_id: String,
    pub month: i32,
    pub year: i32,
    pub fee_name: String,
    pub fee_amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
