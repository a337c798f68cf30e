// src/view_models.rs

#[derive(Clone, Debug, PartialEq)]
pub struct QuizInfo {
    pub name: String,
    pub topic: String,
    pub difficulty: String,
    pub question_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionRow {
    pub idx: usize,                 // índice 0-based en quiz.questions
    pub number: usize,              // número "humano" (1,2,3…)
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: Option<usize>,     // None si la respuesta no coincide con ninguna opción
}

impl QuizInfo {
    pub fn label(&self) -> String {
        let questions = match self.question_count {
            1 => "1 question".to_string(),
            n => format!("{n} questions"),
        };
        let meta: Vec<&str> = [self.topic.as_str(), self.difficulty.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if meta.is_empty() {
            format!("{} ({questions})", self.name)
        } else {
            format!("{} · {} ({questions})", self.name, meta.join(" · "))
        }
    }
}

impl QuestionRow {
    pub fn title(&self) -> String {
        format!("{}. {}", self.number, self.prompt)
    }

    pub fn option_label(&self, i: usize) -> String {
        let text = self.options.get(i).map(String::as_str).unwrap_or_default();
        if self.correct == Some(i) {
            format!("✅ {text}")
        } else {
            format!("• {text}")
        }
    }
}
