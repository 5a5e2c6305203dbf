/// Clave de localStorage para el cache de la lista de interns
pub const INTERNS_CACHE_KEY: &str = "interns_cache";

/// Selector del host de montaje de la aplicación
pub const APP_HOST_ID: &str = "app";
