// ============================================================================
// ROUTE - Rutas del sitio
// ============================================================================

/// Página a renderizar para una ubicación del navegador
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Página principal, opcionalmente con un ancla (`/#quote`)
    Home { anchor: Option<String> },
    /// Política de cumplimiento (`/compliance` o `/compliance.html`)
    Compliance,
    NotFound { path: String },
}

impl Route {
    /// Resolver ruta desde `location.pathname` y `location.hash`
    pub fn from_location(pathname: &str, hash: &str) -> Self {
        let path = pathname.trim();
        let normalized = path.trim_end_matches('/');

        match normalized {
            "" | "/index.html" => Route::Home {
                anchor: anchor_from_hash(hash),
            },
            "/compliance" | "/compliance.html" => Route::Compliance,
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Ruta canónica de la página
    pub fn path(&self) -> &str {
        match self {
            Route::Home { .. } => "/",
            Route::Compliance => "/compliance",
            Route::NotFound { path } => path,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home { .. })
    }
}

/// `#quote` -> `Some("quote")`; vacío -> `None`
pub fn anchor_from_hash(hash: &str) -> Option<String> {
    let anchor = hash.trim().trim_start_matches('#');
    if anchor.is_empty() {
        None
    } else {
        Some(anchor.to_string())
    }
}
