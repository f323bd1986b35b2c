//! # LearningStyle: Vetor de Pesos de Modalidade
//!
//! O [`LearningStyle`] descreve **como** o usuário prefere aprender, em quatro
//! dimensões independentes ([`StyleDimension`]). Os pesos não precisam somar
//! um total fixo: o motor normaliza pela soma no momento do uso.
//!
//! ```text
//! visual: 80   auditory: 20   reading: 50   kinesthetic: 0
//!   └──────────── soma = 150 → cada peso é dividido por 150
//! ```
//!
//! Um estilo com todos os pesos zerados é o estado "não preenchido":
//! é o que [`PreferenceStore::load`](crate::store::PreferenceStore::load)
//! produz para um usuário sem preferências salvas.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Uma das quatro modalidades de aprendizagem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleDimension {
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
}

impl StyleDimension {
    /// As quatro dimensões, na ordem fixa usada pelas regras de recomendação.
    pub const ALL: [StyleDimension; 4] = [
        StyleDimension::Visual,
        StyleDimension::Auditory,
        StyleDimension::Reading,
        StyleDimension::Kinesthetic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StyleDimension::Visual => "visual",
            StyleDimension::Auditory => "auditory",
            StyleDimension::Reading => "reading",
            StyleDimension::Kinesthetic => "kinesthetic",
        }
    }
}

/// Pesos não-negativos do usuário para cada modalidade.
///
/// Na prática os pesos vêm de sliders 0-100 do questionário, mas
/// qualquer valor finito não-negativo é aceito.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningStyle {
    pub visual: f64,
    pub auditory: f64,
    pub reading: f64,
    pub kinesthetic: f64,
}

impl LearningStyle {
    pub fn new(visual: f64, auditory: f64, reading: f64, kinesthetic: f64) -> Self {
        Self {
            visual,
            auditory,
            reading,
            kinesthetic,
        }
    }

    /// Peso do usuário em uma dimensão.
    pub fn weight(&self, dimension: StyleDimension) -> f64 {
        match dimension {
            StyleDimension::Visual => self.visual,
            StyleDimension::Auditory => self.auditory,
            StyleDimension::Reading => self.reading,
            StyleDimension::Kinesthetic => self.kinesthetic,
        }
    }

    /// Soma dos quatro pesos (denominador da normalização).
    pub fn total(&self) -> f64 {
        StyleDimension::ALL.iter().map(|d| self.weight(*d)).sum()
    }

    /// `true` quando todos os pesos são zero (estilo ainda não preenchido).
    pub fn is_unset(&self) -> bool {
        self.total() == 0.0
    }

    /// Rejeita pesos negativos, NaN ou infinitos.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for dimension in StyleDimension::ALL {
            let value = self.weight(dimension);
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidStyleWeight {
                    dimension: dimension.label(),
                    value,
                });
            }
        }
        Ok(())
    }
}
