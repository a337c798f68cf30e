use super::*;
use crate::error::StoreError;

impl QuizEditorApp {
    pub fn quiz_infos(&self) -> Result<Vec<QuizInfo>, StoreError> {
        Ok(self
            .store
            .load_all()?
            .into_iter()
            .map(|quiz| QuizInfo {
                question_count: quiz.questions.len(),
                topic: quiz.topic().to_string(),
                difficulty: quiz.difficulty().to_string(),
                name: quiz.name,
            })
            .collect())
    }

    pub fn question_rows(&self) -> Vec<QuestionRow> {
        let Some(editor) = self.editor() else {
            return Vec::new();
        };
        editor
            .questions()
            .iter()
            .enumerate()
            .map(|(idx, q)| QuestionRow {
                idx,
                number: idx + 1,
                prompt: q.question.clone(),
                options: q.options.clone(),
                correct: q.correct_index(),
            })
            .collect()
    }

    /// Cabecera de la pantalla de edición
    pub fn current_quiz_info(&self) -> Option<QuizInfo> {
        let quiz = self.editor()?.quiz();
        Some(QuizInfo {
            name: quiz.name.clone(),
            topic: quiz.topic().to_string(),
            difficulty: quiz.difficulty().to_string(),
            question_count: quiz.questions.len(),
        })
    }
}
