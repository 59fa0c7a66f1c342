use diesel::prelude::*;

use crate::infra::db::postgres::schema::imagenes;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = imagenes)]
pub struct ImageEntity {
    pub id: i32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = imagenes)]
pub struct InsertImageEntity {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, AsChangeset)]
#[diesel(table_name = imagenes)]
pub struct UpdateImageEntity {
    pub url: String,
}
