use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Número de opciones que tiene una pregunta nueva
pub const OPTION_COUNT: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String,            // Enunciado
    pub options: Vec<String>,        // Opciones de respuesta
    // Texto de la opción correcta (por valor, no por índice). Si falta en el almacén no se inventa.
    #[serde(rename = "correctAnswer", default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    // Campos desconocidos del almacén: se conservan tal cual
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    pub fn new(question: impl Into<String>, options: Vec<String>, correct_answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            options,
            correct_answer: Some(correct_answer.into()),
            extra: Map::new(),
        }
    }

    /// Posición de `correct_answer` dentro de `options`.
    /// Si hay opciones repetidas gana la primera; `None` si el enlace está roto.
    pub fn correct_index(&self) -> Option<usize> {
        let correct = self.correct_answer.as_deref()?;
        self.options.iter().position(|o| o == correct)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quiz {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quiz {
    pub fn new(name: impl Into<String>, topic: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topic: Some(topic.into()),
            difficulty: Some(difficulty.into()),
            questions: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or_default()
    }

    pub fn difficulty(&self) -> &str {
        self.difficulty.as_deref().unwrap_or_default()
    }

    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }
}

/// Toda la colección que vive bajo una única clave del almacén
pub type Collection = Vec<Quiz>;

/// Buffer de edición detrás del diálogo de editar/añadir
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>, // None = la respuesta guardada no coincide con ninguna opción
}

impl QuestionDraft {
    /// Borrador vacío para "Añadir pregunta": 4 opciones en blanco, la primera marcada
    pub fn blank() -> Self {
        Self {
            prompt: String::new(),
            options: vec![String::new(); OPTION_COUNT],
            selected: Some(0),
        }
    }

    pub fn from_question(question: &Question) -> Self {
        Self {
            prompt: question.question.clone(),
            options: question.options.clone(),
            selected: question.correct_index(),
        }
    }

    /// Mismo criterio que el botón "Save": nada vacío y una opción válida marcada
    pub fn can_save(&self) -> bool {
        !self.prompt.is_empty()
            && self.options.iter().all(|opt| !opt.trim().is_empty())
            && self.selected_option().is_some()
    }

    pub fn selected_option(&self) -> Option<&String> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Construye la pregunta; `None` si no hay opción marcada
    pub fn to_question(&self) -> Option<Question> {
        let correct = self.selected_option()?.clone();
        Some(Question::new(self.prompt.clone(), self.options.clone(), correct))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Existing(usize),
    New,
}

/// Máquina de estados única para los flujos de edición y borrado
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Editing {
        target: EditTarget,
        draft: QuestionDraft,
    },
    ConfirmDelete {
        index: usize,
    },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }
}
