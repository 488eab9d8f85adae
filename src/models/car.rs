use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Car {
    pub car_id: String,
    pub car_type: i64,
    #[serde(default)]
    pub customer_id: Option<String>,
}

/// Body of `POST /cars/`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CarCreate {
    pub car_id: String,
    pub car_type: i64,
}

/// Body of `PUT /cars/{id}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CarUpdate {
    pub car_type: i64,
}

/// Body of `POST /cars/types`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewCarType {
    pub car_type: String,
}
