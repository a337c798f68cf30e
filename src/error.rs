use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no se pudo leer/escribir el almacén: {0}")]
    Io(#[from] std::io::Error),
    #[error("datos de quizzes mal formados: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("almacenamiento del navegador no disponible: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Quiz not found: {0}")]
    NotFound(String),
    #[error("pregunta {index} fuera de rango (hay {len})")]
    InvalidIndex { index: usize, len: usize },
    #[error("'{0}' no está permitido en el estado actual del editor")]
    InvalidState(&'static str),
    #[error("falta el enunciado, alguna opción o la respuesta correcta")]
    IncompleteDraft,
    #[error(transparent)]
    Store(#[from] StoreError),
}
