// src/data.rs

use crate::error::StoreError;
use crate::model::Collection;
use crate::store::QuizStore;
use log::{info, warn};

/// Colección de ejemplo embebida en el binario
pub fn read_seed_collection() -> Result<Collection, serde_yaml::Error> {
    let file_content = include_str!("data/quizzes.yaml");
    serde_yaml::from_str(file_content)
}

/// Si el almacén está vacío, escribe la colección de ejemplo.
/// Devuelve `true` si ha sembrado algo.
pub fn seed_if_empty<S: QuizStore + ?Sized>(store: &mut S, seed: &Collection) -> Result<bool, StoreError> {
    // Se mira el valor crudo: entradas ilegibles también cuentan como datos
    if !store.load_entries()?.is_empty() {
        return Ok(false);
    }
    store.replace(seed)?;
    info!("almacén vacío: sembrados {} quizzes de ejemplo", seed.len());
    Ok(true)
}

/// Siembra al arrancar; cualquier fallo sólo se registra y la app sigue
pub fn seed_store(store: &mut dyn QuizStore) {
    match read_seed_collection() {
        Ok(seed) => {
            if let Err(e) = seed_if_empty(store, &seed) {
                warn!("no se pudo sembrar el almacén: {e}");
            }
        }
        Err(e) => warn!("colección de ejemplo inválida: {e}"),
    }
}
