use serde::{Deserialize, Serialize};

/// Registro de intern (stagiaire) tal como lo expone el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Intern {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Payload de creación: el backend asigna el id
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewIntern {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}
