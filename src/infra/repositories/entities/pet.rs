//! Pet database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Owner, Pet};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// NULL while the pet is unassigned
    pub owner_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id"
    )]
    Owner,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a pet row and its joined owner row to a domain entity
impl From<(Model, Option<super::owner::Model>)> for Pet {
    fn from((model, owner): (Model, Option<super::owner::Model>)) -> Self {
        Pet {
            id: model.id,
            name: model.name,
            owner: owner.map(Owner::from),
        }
    }
}
