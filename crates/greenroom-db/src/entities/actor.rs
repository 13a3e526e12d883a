//! Actor entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    /// Actor id (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Actor's full name
    pub name: String,

    /// Age in years
    pub age: i32,

    /// Gender as free text
    pub gender: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
