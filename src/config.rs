// src/config.rs

use std::path::PathBuf;

/// Variable de entorno con la ruta del fichero JSON (sólo nativo)
pub const STORE_PATH_VAR: &str = "QUIZ_EDITOR_STORE";
pub const DEFAULT_STORE_PATH: &str = "quizzes.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub store_path: PathBuf,
    pub initial_quiz: Option<String>, // quiz a abrir directamente al arrancar
    pub seed_if_empty: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            initial_quiz: None,
            seed_if_empty: true,
        }
    }
}

impl EditorConfig {
    /// `store_var` = valor de `QUIZ_EDITOR_STORE`, `args` sin el nombre del binario
    pub fn from_parts(store_var: Option<String>, args: impl IntoIterator<Item = String>) -> Self {
        let store_path = store_var
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        let initial_quiz = args.into_iter().find(|a| !a.trim().is_empty());

        Self {
            store_path,
            initial_quiz,
            ..Self::default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_parts(std::env::var(STORE_PATH_VAR).ok(), std::env::args().skip(1))
    }

    /// En la web el quiz inicial llega como `?quiz=Nombre`
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self {
            initial_quiz: initial_quiz_from_location(),
            ..Self::default()
        }
    }
}

/// Valor crudo (sin decodificar) de `quiz` en una query string
pub fn quiz_from_query(search: &str) -> Option<&str> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "quiz")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn initial_quiz_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let raw = quiz_from_query(&search)?;
    js_sys::decode_uri_component(raw).ok()?.as_string()
}
