use serde::{Deserialize, Serialize};

use crate::domain::entities::schedules::{
    InsertScheduleEntity, ScheduleEntity, UpdateScheduleEntity,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleModel {
    pub id: i32,
    pub nombre_clase: String,
    pub tiempo: String,
    pub encargado: String,
}

impl From<ScheduleEntity> for ScheduleModel {
    fn from(value: ScheduleEntity) -> Self {
        Self {
            id: value.id,
            nombre_clase: value.nombre_clase,
            tiempo: value.tiempo,
            encargado: value.encargado,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleFieldsModel {
    pub nombre_clase: String,
    pub tiempo: String,
    pub encargado: String,
}

impl ScheduleFieldsModel {
    pub fn to_insert_entity(&self) -> InsertScheduleEntity {
        InsertScheduleEntity {
            nombre_clase: self.nombre_clase.clone(),
            tiempo: self.tiempo.clone(),
            encargado: self.encargado.clone(),
        }
    }

    pub fn to_update_entity(&self) -> UpdateScheduleEntity {
        UpdateScheduleEntity {
            nombre_clase: self.nombre_clase.clone(),
            tiempo: self.tiempo.clone(),
            encargado: self.encargado.clone(),
        }
    }
}
