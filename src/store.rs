// src/store.rs

use crate::error::StoreError;
use crate::model::{Collection, Quiz};
use log::warn;
use serde_json::Value;

/// Clave única bajo la que se guarda toda la colección
pub const STORE_KEY: &str = "quizzes";

/// Nombre de una entrada cruda, si lo tiene
pub fn entry_name(entry: &Value) -> Option<&str> {
    entry.get("name")?.as_str()
}

/// Repositorio de quizzes. Los backends sólo saben leer y escribir el valor
/// crudo; la (de)serialización de la colección es común a todos.
pub trait QuizStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError>;
    fn write_raw(&mut self, raw: &str) -> Result<(), StoreError>;

    /// Colección como entradas JSON opacas.
    /// Valor ausente, vacío o `null` = todavía no hay quizzes.
    fn load_entries(&self) -> Result<Vec<Value>, StoreError> {
        match self.read_raw()? {
            Some(raw) if !raw.trim().is_empty() => {
                let entries: Option<Vec<Value>> = serde_json::from_str(&raw)?;
                Ok(entries.unwrap_or_default())
            }
            _ => Ok(Vec::new()),
        }
    }

    fn replace_entries(&mut self, entries: &[Value]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries)?;
        self.write_raw(&raw)
    }

    /// Los quizzes legibles; las entradas con otra forma se saltan
    fn load_all(&self) -> Result<Collection, StoreError> {
        Ok(self
            .load_entries()?
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Quiz>(entry) {
                Ok(quiz) => Some(quiz),
                Err(e) => {
                    warn!("entrada de quiz ilegible, se ignora: {e}");
                    None
                }
            })
            .collect())
    }

    /// Sólo se interpreta la entrada pedida; el resto sigue siendo opaco
    fn get(&self, name: &str) -> Result<Option<Quiz>, StoreError> {
        self.load_entries()?
            .into_iter()
            .find(|entry| entry_name(entry) == Some(name))
            .map(serde_json::from_value::<Quiz>)
            .transpose()
            .map_err(StoreError::from)
    }

    /// Sustituye la colección entera de una sola escritura
    fn replace(&mut self, quizzes: &[Quiz]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(quizzes)?;
        self.write_raw(&raw)
    }
}

/// Almacén en memoria (tests y arranque sin disco)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn with_collection(quizzes: &[Quiz]) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.replace(quizzes)?;
        Ok(store)
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl QuizStore for MemoryStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        Ok(self.raw.clone())
    }

    fn write_raw(&mut self, raw: &str) -> Result<(), StoreError> {
        self.raw = Some(raw.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::*;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    /// Colección guardada como JSON en un fichero (equivalente nativo de localStorage)
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl QuizStore for FileStore {
        fn read_raw(&self) -> Result<Option<String>, StoreError> {
            match std::fs::read_to_string(&self.path) {
                Ok(raw) => Ok(Some(raw)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn write_raw(&mut self, raw: &str) -> Result<(), StoreError> {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            // Escribe a un temporal y renombra: quien lea ve el valor viejo o el nuevo
            let tmp = self.path.with_extension("json.tmp");
            std::fs::write(&tmp, raw)?;
            std::fs::rename(&tmp, &self.path)?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;

    /// `window.localStorage`, la misma clave que usa la versión web
    #[derive(Debug, Clone)]
    pub struct LocalStorageStore {
        key: String,
    }

    impl Default for LocalStorageStore {
        fn default() -> Self {
            Self {
                key: STORE_KEY.to_string(),
            }
        }
    }

    fn local_storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no hay window".into()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage desactivado".into()))
    }

    impl QuizStore for LocalStorageStore {
        fn read_raw(&self) -> Result<Option<String>, StoreError> {
            local_storage()?
                .get_item(&self.key)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }

        fn write_raw(&mut self, raw: &str) -> Result<(), StoreError> {
            local_storage()?
                .set_item(&self.key, raw)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }
    }
}
