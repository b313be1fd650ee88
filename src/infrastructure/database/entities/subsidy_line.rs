//! Subsidy line entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subsidies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub connection_id: String,
    pub month: i32,
    pub year: i32,
    pub subsidy_name: String,

    /// Body funding the subsidy
    pub provider_name: String,

    pub rate_per_unit: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
