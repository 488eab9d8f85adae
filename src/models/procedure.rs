use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(try_from = "u8", into = "u8")]
pub enum ProcedureStatus {
    Pending,
    InProgress,
    Completed,
}

impl TryFrom<u8> for ProcedureStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProcedureStatus::Pending),
            1 => Ok(ProcedureStatus::InProgress),
            2 => Ok(ProcedureStatus::Completed),
            other => Err(format!("unknown procedure status {}", other)),
        }
    }
}

impl From<ProcedureStatus> for u8 {
    fn from(status: ProcedureStatus) -> Self {
        match status {
            ProcedureStatus::Pending => 0,
            ProcedureStatus::InProgress => 1,
            ProcedureStatus::Completed => 2,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Procedure {
    pub procedure_id: i64,
    pub order_id: String,
    pub procedure_text: String,
    pub current_status: ProcedureStatus,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProcedureCreate {
    pub order_id: String,
    pub procedure_text: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProcedureUpdate {
    pub order_id: String,
    pub procedure_id: i64,
    pub current_status: ProcedureStatus,
}

/// Free-text work note a worker attaches to a procedure
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProcedureNote {
    pub order_id: String,
    pub procedure_id: i64,
    pub note: String,
}
