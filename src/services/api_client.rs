// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Sin lógica de negocio: solo requests contra el backend de interns
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::intern::{Intern, NewIntern};

/// Cliente API - stateless
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    /// Listar todos los interns
    pub async fn list_interns(&self) -> Result<Vec<Intern>, String> {
        let url = format!("{}/interns", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Vec<Intern>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Crear un intern (el backend asigna el id)
    pub async fn create_intern(&self, intern: &NewIntern) -> Result<Intern, String> {
        let url = format!("{}/interns", self.base_url);

        log::info!("📝 Creando intern: {}", intern.name);

        let response = Request::post(&url)
            .json(intern)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<Intern>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Actualizar un intern existente
    pub async fn update_intern(&self, id: &str, intern: &NewIntern) -> Result<Intern, String> {
        let url = format!("{}/interns/{}", self.base_url, id);

        log::info!("✏️ Actualizando intern {}", id);

        let response = Request::put(&url)
            .json(intern)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<Intern>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Borrar un intern
    pub async fn delete_intern(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/interns/{}", self.base_url, id);

        log::info!("🗑️ Borrando intern {}", id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
