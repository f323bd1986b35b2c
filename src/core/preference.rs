//! # Preference: Perfil de Aprendizagem do Usuário
//!
//! A [`Preference`] é o **único insumo** que parametriza o motor: pesos de
//! estilo, preferências por disciplina e horário, e as respostas cruas do
//! questionário que as produziu.
//!
//! ## Atualização Parcial
//!
//! Atualizações chegam como [`PreferenceUpdate`]: uma struct tipada em que
//! todo campo é `Option`. [`Preference::merged`] aplica apenas os campos
//! declarados, valida o resultado e devolve um **novo** registro:
//!
//! ```text
//! atual ──merged(update)──► nova (id novo, updated_at = agora)
//!   │                          │
//!   └── nunca é mutada ────────┘ substitui a atual no store
//! ```
//!
//! ## Exemplo
//!
//! ```rust
//! use learning_path::{LearningStyle, Preference, PreferenceUpdate};
//!
//! let base = Preference::new("ana");
//! let update = PreferenceUpdate {
//!     learning_style: Some(LearningStyle::new(90.0, 10.0, 40.0, 20.0)),
//!     ..Default::default()
//! };
//! let next = base.merged(update).unwrap();
//! assert_eq!(next.user_id, "ana");
//! assert_ne!(next.id, base.id);
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::style::LearningStyle;
use crate::error::ValidationError;

/// Alias de tipo para o identificador de uma [Preference].
pub type PreferenceId = Uuid;

/// Valor neutro das preferências de dificuldade e interatividade (escala 0-100).
pub const NEUTRAL_PREFERENCE: f64 = 50.0;

/// Janela de estudo preferida.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePreference {
    /// Períodos do dia ("morning", "evening", ...).
    #[serde(default)]
    pub preferred_time: Vec<String>,
    /// Duração típica de uma sessão, em minutos.
    #[serde(default)]
    pub study_duration: u32,
}

/// Resposta crua do questionário.
///
/// Sliders produzem números, múltipla escolha produz listas e perguntas
/// sim/não produzem booleanos.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Number(f64),
    Choices(Vec<String>),
}

/// Perfil de aprendizagem de um usuário.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    /// Identificador desta versão do perfil (cada save gera um novo).
    pub id: PreferenceId,

    /// Usuário dono do perfil.
    pub user_id: String,

    /// Peso por disciplina (ex: `"Mathematics" → 80.0`).
    #[serde(default)]
    pub subject_preferences: BTreeMap<String, f64>,

    #[serde(default)]
    pub time_preference: TimePreference,

    /// Pesos de modalidade: o que o motor efetivamente consome.
    #[serde(default)]
    pub learning_style: LearningStyle,

    /// Preferência de dificuldade (0-100).
    pub difficulty_preference: f64,

    /// Preferência por interatividade (0-100).
    pub interactivity_preference: f64,

    /// Gosta de estudar em grupo.
    #[serde(default)]
    pub social_learning: bool,

    /// Respostas cruas, indexadas pelo ID da pergunta.
    #[serde(default)]
    pub answers: BTreeMap<String, AnswerValue>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Preference {
    /// Cria um perfil "em branco" para o usuário.
    ///
    /// - Todos os pesos de estilo em zero (o motor devolve score 0)
    /// - Dificuldade e interatividade neutras (50)
    /// - Sem disciplinas, horários ou respostas
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            subject_preferences: BTreeMap::new(),
            time_preference: TimePreference::default(),
            learning_style: LearningStyle::default(),
            difficulty_preference: NEUTRAL_PREFERENCE,
            interactivity_preference: NEUTRAL_PREFERENCE,
            social_learning: false,
            answers: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Aplica uma atualização parcial e devolve um novo registro validado.
    ///
    /// Campos `None` do update mantêm o valor atual. O resultado recebe um
    /// ID novo e `updated_at = agora`; `created_at` é preservado.
    ///
    /// # Erros
    ///
    /// [`ValidationError`] se o registro resultante violar algum limite
    /// (veja [`Preference::validate`]). Nesse caso `self` não muda.
    pub fn merged(&self, update: PreferenceUpdate) -> Result<Preference, ValidationError> {
        let mut next = self.clone();
        if let Some(user_id) = update.user_id {
            next.user_id = user_id;
        }
        if let Some(subjects) = update.subject_preferences {
            next.subject_preferences = subjects;
        }
        if let Some(time) = update.time_preference {
            next.time_preference = time;
        }
        if let Some(style) = update.learning_style {
            next.learning_style = style;
        }
        if let Some(difficulty) = update.difficulty_preference {
            next.difficulty_preference = difficulty;
        }
        if let Some(interactivity) = update.interactivity_preference {
            next.interactivity_preference = interactivity;
        }
        if let Some(social) = update.social_learning {
            next.social_learning = social;
        }
        if let Some(answers) = update.answers {
            next.answers = answers;
        }
        next.validate()?;

        next.id = Uuid::new_v4();
        next.updated_at = Utc::now();
        Ok(next)
    }

    /// Verifica os limites do registro.
    ///
    /// - `user_id` não vazio
    /// - pesos de estilo finitos e não-negativos
    /// - dificuldade e interatividade em `[0, 100]`
    /// - pesos de disciplina finitos e não-negativos
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::EmptyUserId);
        }
        self.learning_style.validate()?;
        check_percentage("difficultyPreference", self.difficulty_preference)?;
        check_percentage("interactivityPreference", self.interactivity_preference)?;
        for (subject, weight) in &self.subject_preferences {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ValidationError::InvalidSubjectWeight {
                    subject: subject.clone(),
                    value: *weight,
                });
            }
        }
        Ok(())
    }
}

fn check_percentage(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field, value })
    }
}

/// Atualização parcial de uma [Preference].
///
/// Somente os campos `Some` são aplicados por [`Preference::merged`].
/// `id`, `created_at` e `updated_at` não são atualizáveis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceUpdate {
    pub user_id: Option<String>,
    pub subject_preferences: Option<BTreeMap<String, f64>>,
    pub time_preference: Option<TimePreference>,
    pub learning_style: Option<LearningStyle>,
    pub difficulty_preference: Option<f64>,
    pub interactivity_preference: Option<f64>,
    pub social_learning: Option<bool>,
    pub answers: Option<BTreeMap<String, AnswerValue>>,
}
