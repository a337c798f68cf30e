// src/editor.rs

//! Núcleo del editor: copia editable de las preguntas de un quiz y la
//! máquina de estados de los diálogos. Cada mutación reescribe la colección
//! completa en el almacén a través de [`QuizEditor::persist`].

use crate::error::{EditorError, StoreError};
use crate::model::{EditTarget, EditorState, Question, QuestionDraft, Quiz};
use crate::store::{QuizStore, entry_name};
use log::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct QuizEditor {
    quiz: Quiz,
    state: EditorState,
}

impl QuizEditor {
    /// Busca el quiz por nombre exacto. Si no existe la sesión termina aquí.
    pub fn load<S: QuizStore + ?Sized>(store: &S, name: &str) -> Result<Self, EditorError> {
        match store.get(name)? {
            Some(quiz) => {
                info!("quiz '{}' cargado ({} preguntas)", quiz.name, quiz.questions.len());
                Ok(Self {
                    quiz,
                    state: EditorState::Idle,
                })
            }
            None => {
                warn!("quiz '{name}' no encontrado en el almacén");
                Err(EditorError::NotFound(name.to_string()))
            }
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn name(&self) -> &str {
        &self.quiz.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.quiz.questions
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn draft(&self) -> Option<&QuestionDraft> {
        match &self.state {
            EditorState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut QuestionDraft> {
        match &mut self.state {
            EditorState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn can_save(&self) -> bool {
        self.draft().is_some_and(QuestionDraft::can_save)
    }

    fn check_index(&self, index: usize) -> Result<(), EditorError> {
        let len = self.quiz.questions.len();
        if index < len {
            Ok(())
        } else {
            Err(EditorError::InvalidIndex { index, len })
        }
    }

    fn ensure_idle(&self, op: &'static str) -> Result<(), EditorError> {
        if self.state.is_idle() {
            Ok(())
        } else {
            warn!("'{op}' rechazado: estado actual {:?}", self.state);
            Err(EditorError::InvalidState(op))
        }
    }

    // ----------- EDITAR / AÑADIR -----------

    pub fn start_edit(&mut self, index: usize) -> Result<(), EditorError> {
        self.ensure_idle("start_edit")?;
        self.check_index(index)?;
        let draft = QuestionDraft::from_question(&self.quiz.questions[index]);
        if draft.selected.is_none() {
            warn!(
                "pregunta {index} de '{}': la respuesta correcta no coincide con ninguna opción",
                self.quiz.name
            );
        }
        self.state = EditorState::Editing {
            target: EditTarget::Existing(index),
            draft,
        };
        debug!("editando pregunta {index}");
        Ok(())
    }

    pub fn start_add(&mut self) -> Result<(), EditorError> {
        self.ensure_idle("start_add")?;
        self.state = EditorState::Editing {
            target: EditTarget::New,
            draft: QuestionDraft::blank(),
        };
        debug!("añadiendo pregunta nueva");
        Ok(())
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) -> Result<(), EditorError> {
        let draft = self.draft_mut().ok_or(EditorError::InvalidState("set_prompt"))?;
        draft.prompt = text.into();
        Ok(())
    }

    pub fn set_option(&mut self, option: usize, text: impl Into<String>) -> Result<(), EditorError> {
        let draft = self.draft_mut().ok_or(EditorError::InvalidState("set_option"))?;
        let len = draft.options.len();
        let slot = draft
            .options
            .get_mut(option)
            .ok_or(EditorError::InvalidIndex { index: option, len })?;
        *slot = text.into();
        Ok(())
    }

    pub fn select_answer(&mut self, option: usize) -> Result<(), EditorError> {
        let draft = self.draft_mut().ok_or(EditorError::InvalidState("select_answer"))?;
        let len = draft.options.len();
        if option >= len {
            return Err(EditorError::InvalidIndex { index: option, len });
        }
        draft.selected = Some(option);
        Ok(())
    }

    /// Guarda el borrador (reemplaza o añade) y vuelve a `Idle`.
    /// Si la escritura falla el diálogo sigue abierto y la lista en memoria no cambia.
    pub fn save<S: QuizStore + ?Sized>(&mut self, store: &mut S) -> Result<(), EditorError> {
        let (target, question) = match &self.state {
            EditorState::Editing { target, draft } => {
                let question = draft
                    .can_save()
                    .then(|| draft.to_question())
                    .flatten()
                    .ok_or(EditorError::IncompleteDraft)?;
                (*target, question)
            }
            _ => return Err(EditorError::InvalidState("save")),
        };

        let mut questions = self.quiz.questions.clone();
        match target {
            EditTarget::Existing(index) => {
                let len = questions.len();
                let slot = questions
                    .get_mut(index)
                    .ok_or(EditorError::InvalidIndex { index, len })?;
                *slot = question;
            }
            EditTarget::New => questions.push(question),
        }

        self.persist(store, questions)?;
        self.state = EditorState::Idle;
        Ok(())
    }

    /// Cierra cualquier diálogo sin tocar el almacén
    pub fn cancel(&mut self) {
        if !self.state.is_idle() {
            debug!("cancelado: {:?}", self.state);
        }
        self.state = EditorState::Idle;
    }

    // ----------- BORRAR -----------

    pub fn request_delete(&mut self, index: usize) -> Result<(), EditorError> {
        self.ensure_idle("request_delete")?;
        self.check_index(index)?;
        self.state = EditorState::ConfirmDelete { index };
        debug!("confirmación de borrado pendiente para la pregunta {index}");
        Ok(())
    }

    pub fn confirm_delete<S: QuizStore + ?Sized>(&mut self, store: &mut S) -> Result<(), EditorError> {
        let index = match self.state {
            EditorState::ConfirmDelete { index } => index,
            _ => return Err(EditorError::InvalidState("confirm_delete")),
        };
        self.check_index(index)?;

        let mut questions = self.quiz.questions.clone();
        questions.remove(index);

        self.persist(store, questions)?;
        self.state = EditorState::Idle;
        Ok(())
    }

    /// Única primitiva de escritura: relee la colección, cambia sólo la lista
    /// de preguntas del quiz actual y la escribe entera.
    fn persist<S: QuizStore + ?Sized>(
        &mut self,
        store: &mut S,
        questions: Vec<Question>,
    ) -> Result<(), EditorError> {
        // Los demás quizzes se tratan como JSON opaco y vuelven tal cual
        let mut entries = store.load_entries()?;
        let new_questions = serde_json::to_value(&questions).map_err(StoreError::from)?;

        let mut matched = false;
        for entry in entries.iter_mut() {
            if entry_name(entry) != Some(self.quiz.name.as_str()) {
                continue;
            }
            if let Some(fields) = entry.as_object_mut() {
                fields.insert("questions".to_string(), new_questions.clone());
                matched = true;
            }
        }
        if !matched {
            warn!("'{}' ya no está en el almacén; no se escribe nada", self.quiz.name);
            return Err(EditorError::NotFound(self.quiz.name.clone()));
        }

        if let Err(e) = store.replace_entries(&entries) {
            warn!("no se pudo guardar '{}': {e}", self.quiz.name);
            return Err(e.into());
        }

        info!("quiz '{}' guardado ({} preguntas)", self.quiz.name, questions.len());
        self.quiz.questions = questions;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::{Value, json};

    fn opts(items: [&str; 4]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn france() -> Question {
        Question::new("Capital of France?", opts(["Paris", "Lyon", "Nice", "Tours"]), "Paris")
    }

    fn spain() -> Question {
        Question::new("Capital of Spain?", opts(["Madrid", "Sevilla", "Bilbao", "Vigo"]), "Madrid")
    }

    fn collection() -> Vec<Quiz> {
        vec![
            Quiz::new("Geo", "World", "Easy").with_questions(vec![france(), spain()]),
            Quiz::new("History", "Europe", "Hard").with_questions(vec![Question::new(
                "Year of the French Revolution?",
                opts(["1789", "1815", "1492", "1914"]),
                "1789",
            )]),
        ]
    }

    fn store() -> MemoryStore {
        MemoryStore::with_collection(&collection()).unwrap()
    }

    /// Lee bien pero falla al escribir
    struct ReadOnlyStore(MemoryStore);

    impl QuizStore for ReadOnlyStore {
        fn read_raw(&self) -> Result<Option<String>, StoreError> {
            self.0.read_raw()
        }

        fn write_raw(&mut self, _raw: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disco lleno".into()))
        }
    }

    #[test]
    fn load_missing_quiz_is_not_found() {
        let err = QuizEditor::load(&store(), "Chemistry").unwrap_err();
        assert!(matches!(err, EditorError::NotFound(name) if name == "Chemistry"));
    }

    #[test]
    fn load_malformed_store_is_a_store_error_not_not_found() {
        let err = QuizEditor::load(&MemoryStore::from_raw("[{"), "Geo").unwrap_err();
        assert!(matches!(err, EditorError::Store(StoreError::Parse(_))));
    }

    #[test]
    fn load_exposes_stored_questions_unchanged() {
        let editor = QuizEditor::load(&store(), "Geo").unwrap();
        assert_eq!(editor.questions(), &[france(), spain()]);
        assert_eq!(editor.quiz().topic(), "World");
        assert!(editor.state().is_idle());
    }

    #[test]
    fn edit_changes_correct_answer_by_selected_index() {
        let mut store = store();
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();

        editor.start_edit(0).unwrap();
        assert_eq!(editor.draft().unwrap().selected, Some(0));
        editor.select_answer(1).unwrap();
        editor.save(&mut store).unwrap();

        let expected = Question::new("Capital of France?", opts(["Paris", "Lyon", "Nice", "Tours"]), "Lyon");
        assert_eq!(editor.questions()[0], expected);
        assert!(editor.state().is_idle());

        let saved = store.load_all().unwrap();
        assert_eq!(saved[0].questions, vec![expected, spain()]);
        assert_eq!(saved[0].topic(), "World");
        assert_eq!(saved[0].difficulty(), "Easy");
        assert_eq!(saved[1], collection()[1]);
    }

    #[test]
    fn edit_replaces_prompt_and_options() {
        let mut store = store();
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();

        editor.start_edit(1).unwrap();
        editor.set_prompt("Capital of Portugal?").unwrap();
        for (i, text) in ["Lisboa", "Porto", "Faro", "Braga"].into_iter().enumerate() {
            editor.set_option(i, text).unwrap();
        }
        editor.select_answer(0).unwrap();
        editor.save(&mut store).unwrap();

        let saved = store.get("Geo").unwrap().unwrap();
        assert_eq!(saved.questions[0], france());
        assert_eq!(saved.questions[1].question, "Capital of Portugal?");
        assert_eq!(saved.questions[1].options, opts(["Lisboa", "Porto", "Faro", "Braga"]));
        assert_eq!(saved.questions[1].correct_answer.as_deref(), Some("Lisboa"));
    }

    #[test]
    fn add_appends_exactly_one_question() {
        let mut store = store();
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();

        editor.start_add().unwrap();
        editor.set_prompt("Capital of Italy?").unwrap();
        for (i, text) in ["Milano", "Roma", "Napoli", "Torino"].into_iter().enumerate() {
            editor.set_option(i, text).unwrap();
        }
        editor.select_answer(1).unwrap();
        editor.save(&mut store).unwrap();

        let saved = store.get("Geo").unwrap().unwrap();
        assert_eq!(saved.questions.len(), 3);
        assert_eq!(&saved.questions[..2], &[france(), spain()]);
        assert_eq!(saved.questions[2].correct_answer.as_deref(), Some("Roma"));
        assert_eq!(editor.questions().len(), 3);
    }

    #[test]
    fn delete_removes_entry_and_shifts_the_rest() {
        let mut store = store();
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();

        editor.request_delete(0).unwrap();
        assert_eq!(editor.state(), &EditorState::ConfirmDelete { index: 0 });
        editor.confirm_delete(&mut store).unwrap();

        assert_eq!(editor.questions(), &[spain()]);
        assert_eq!(store.get("Geo").unwrap().unwrap().questions, vec![spain()]);
        assert_eq!(store.get("History").unwrap().unwrap(), collection()[1]);
    }

    #[test]
    fn deleting_last_question_keeps_the_quiz_record() {
        let mut store = store();
        let mut editor = QuizEditor::load(&store, "History").unwrap();

        editor.request_delete(0).unwrap();
        editor.confirm_delete(&mut store).unwrap();

        let saved = store.load_all().unwrap();
        assert_eq!(saved.len(), 2);
        assert!(saved[1].questions.is_empty());
        assert_eq!(saved[1].name, "History");
    }

    #[test]
    fn cancel_leaves_store_byte_for_byte_identical() {
        let store = store();
        let before = store.raw().unwrap().to_string();
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();

        editor.start_edit(0).unwrap();
        editor.set_prompt("changed").unwrap();
        editor.cancel();
        assert!(editor.state().is_idle());

        editor.request_delete(1).unwrap();
        editor.cancel();

        assert_eq!(store.raw().unwrap(), before);
        assert_eq!(editor.questions(), &[france(), spain()]);
    }

    #[test]
    fn broken_correct_answer_seeds_no_selection_and_blocks_save() {
        let mut broken = france();
        broken.correct_answer = Some("Marseille".into());
        let mut store =
            MemoryStore::with_collection(&[Quiz::new("Geo", "", "").with_questions(vec![broken])]).unwrap();
        let before = store.raw().unwrap().to_string();
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();

        editor.start_edit(0).unwrap();
        assert_eq!(editor.draft().unwrap().selected, None);
        assert!(!editor.can_save());
        assert!(matches!(editor.save(&mut store), Err(EditorError::IncompleteDraft)));
        assert!(matches!(editor.state(), EditorState::Editing { .. }));
        assert_eq!(store.raw().unwrap(), before);

        editor.select_answer(2).unwrap();
        editor.save(&mut store).unwrap();
        assert_eq!(editor.questions()[0].correct_answer.as_deref(), Some("Nice"));
    }

    #[test]
    fn blank_option_blocks_save() {
        let mut store = store();
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();

        editor.start_add().unwrap();
        editor.set_prompt("Capital of Italy?").unwrap();
        editor.set_option(0, "Roma").unwrap();
        assert!(matches!(editor.save(&mut store), Err(EditorError::IncompleteDraft)));
        assert_eq!(editor.questions().len(), 2);
    }

    #[test]
    fn workflows_are_mutually_exclusive() {
        let mut editor = QuizEditor::load(&store(), "Geo").unwrap();

        editor.start_edit(0).unwrap();
        assert!(matches!(editor.request_delete(1), Err(EditorError::InvalidState(_))));
        assert!(matches!(editor.start_add(), Err(EditorError::InvalidState(_))));
        editor.cancel();

        editor.request_delete(1).unwrap();
        assert!(matches!(editor.start_edit(0), Err(EditorError::InvalidState(_))));
        assert!(matches!(editor.set_prompt("x"), Err(EditorError::InvalidState(_))));
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let mut editor = QuizEditor::load(&store(), "Geo").unwrap();
        assert!(matches!(
            editor.start_edit(5),
            Err(EditorError::InvalidIndex { index: 5, len: 2 })
        ));
        assert!(matches!(editor.request_delete(2), Err(EditorError::InvalidIndex { .. })));

        editor.start_edit(0).unwrap();
        assert!(matches!(editor.set_option(4, "x"), Err(EditorError::InvalidIndex { .. })));
        assert!(matches!(editor.select_answer(9), Err(EditorError::InvalidIndex { .. })));
    }

    #[test]
    fn failed_write_keeps_memory_and_dialog() {
        let mut store = ReadOnlyStore(store());
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();

        editor.start_edit(0).unwrap();
        editor.select_answer(3).unwrap();
        assert!(matches!(editor.save(&mut store), Err(EditorError::Store(_))));
        assert_eq!(editor.questions()[0], france());
        assert!(matches!(editor.state(), EditorState::Editing { .. }));

        editor.cancel();
        editor.request_delete(0).unwrap();
        assert!(editor.confirm_delete(&mut store).is_err());
        assert_eq!(editor.questions().len(), 2);
        assert_eq!(editor.state(), &EditorState::ConfirmDelete { index: 0 });
    }

    #[test]
    fn persist_fails_when_quiz_vanished_from_store() {
        let mut store = store();
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();
        store.replace(&collection()[1..]).unwrap();
        let before = store.raw().unwrap().to_string();

        editor.request_delete(0).unwrap();
        assert!(matches!(editor.confirm_delete(&mut store), Err(EditorError::NotFound(_))));
        assert_eq!(store.raw().unwrap(), before);
        assert_eq!(editor.questions().len(), 2);
    }

    #[test]
    fn persist_keeps_unknown_fields_of_the_stored_record() {
        let raw = r#"[{"name":"Geo","topic":"World","difficulty":"Easy","author":"ana","questions":[{"question":"Capital of France?","options":["Paris","Lyon","Nice","Tours"],"correctAnswer":"Paris"}]}]"#;
        let mut store = MemoryStore::from_raw(raw);
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();

        editor.start_edit(0).unwrap();
        editor.select_answer(1).unwrap();
        editor.save(&mut store).unwrap();

        let saved = store.get("Geo").unwrap().unwrap();
        assert_eq!(saved.extra["author"], "ana");
        assert_eq!(saved.questions[0].correct_answer.as_deref(), Some("Lyon"));
    }

    #[test]
    fn other_quizzes_stay_value_identical_even_with_missing_fields() {
        let legacy = json!({
            "name": "Legacy",
            "topic": "Old",
            "questions": [{ "question": "Q", "options": ["a", "b", "c", "d"] }]
        });
        let geo = serde_json::to_value(&collection()[0]).unwrap();
        let mut store = MemoryStore::from_raw(Value::Array(vec![geo, legacy.clone()]).to_string());
        let mut editor = QuizEditor::load(&store, "Geo").unwrap();

        editor.start_edit(0).unwrap();
        editor.select_answer(1).unwrap();
        editor.save(&mut store).unwrap();

        let saved: Vec<Value> = serde_json::from_str(store.raw().unwrap()).unwrap();
        assert_eq!(saved[1], legacy);
        assert_eq!(saved[0]["questions"][0]["correctAnswer"], "Lyon");
        assert_eq!(saved[0]["difficulty"], "Easy");
    }

    #[test]
    fn malformed_sibling_does_not_block_loading_or_saving() {
        let numeric = json!({ "name": "Numeric", "difficulty": 3, "questions": [] });
        let geo = serde_json::to_value(&collection()[0]).unwrap();
        let mut store = MemoryStore::from_raw(Value::Array(vec![geo, numeric.clone()]).to_string());

        let mut editor = QuizEditor::load(&store, "Geo").unwrap();
        assert_eq!(editor.questions(), &[france(), spain()]);

        editor.request_delete(1).unwrap();
        editor.confirm_delete(&mut store).unwrap();

        let saved: Vec<Value> = serde_json::from_str(store.raw().unwrap()).unwrap();
        assert_eq!(saved[1], numeric);
        assert_eq!(store.get("Geo").unwrap().unwrap().questions, vec![france()]);
    }
}
