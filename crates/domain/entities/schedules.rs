use diesel::prelude::*;

use crate::infra::db::postgres::schema::horarios;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = horarios)]
pub struct ScheduleEntity {
    pub id: i32,
    pub nombre_clase: String,
    pub tiempo: String,
    pub encargado: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = horarios)]
pub struct InsertScheduleEntity {
    pub nombre_clase: String,
    pub tiempo: String,
    pub encargado: String,
}

#[derive(Debug, Clone, PartialEq, AsChangeset)]
#[diesel(table_name = horarios)]
pub struct UpdateScheduleEntity {
    pub nombre_clase: String,
    pub tiempo: String,
    pub encargado: String,
}
