//! # LearningPath: Trilha Gerada e Pontuada
//!
//! Um [`LearningPath`] é um valor **derivado e descartável**: cópias dos nós
//! do catálogo, já ordenadas por pré-requisito e com o score de cada recurso
//! anexado. Recalcular a trilha com as mesmas entradas produz o mesmo
//! resultado, exceto `id` e timestamps.
//!
//! ## Estrutura
//!
//! ```text
//! LearningPath
//!   ├── nodes: [PathNode]            (ordem topológica)
//!   │     └── resources: [ScoredResource { resource, match_score }]
//!   ├── total_duration               Σ estimated_duration dos nós
//!   ├── average_difficulty           média das dificuldades dos nós
//!   └── match_score                  média de TODOS os scores de recurso
//! ```
//!
//! A trilha nunca altera o catálogo: ela guarda cópias.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::node::KnowledgeNode;
use super::resource::Resource;

/// Alias de tipo para o identificador de um [LearningPath].
pub type PathId = Uuid;

/// Recurso copiado do catálogo com seu score de compatibilidade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResource {
    #[serde(flatten)]
    pub resource: Resource,
    /// Score de [`match_score`](crate::engine::match_score) (0-100).
    pub match_score: f64,
}

/// Nó da trilha: metadados do nó do catálogo + recursos pontuados.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathNode {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub prerequisites: Vec<String>,
    pub next_nodes: Vec<String>,
    pub difficulty: u8,
    pub estimated_duration: u32,
    pub resources: Vec<ScoredResource>,
}

impl PathNode {
    /// Copia um nó do catálogo, pontuando cada recurso com `score`.
    pub fn scored(node: &KnowledgeNode, mut score: impl FnMut(&Resource) -> f64) -> Self {
        Self {
            id: node.id.clone(),
            title: node.title.clone(),
            subject: node.subject.clone(),
            prerequisites: node.prerequisites.clone(),
            next_nodes: node.next_nodes.clone(),
            difficulty: node.difficulty,
            estimated_duration: node.estimated_duration,
            resources: node
                .resources
                .iter()
                .map(|r| ScoredResource {
                    resource: r.clone(),
                    match_score: score(r),
                })
                .collect(),
        }
    }
}

/// Trilha de aprendizagem gerada por [`PathEngine`](crate::engine::PathEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: PathId,
    pub user_id: String,
    pub title: String,
    pub description: String,
    /// Nós em ordem de estudo (pré-requisitos primeiro).
    pub nodes: Vec<PathNode>,
    /// Soma das durações estimadas dos nós, em minutos.
    ///
    /// Acumulado em `u64`: não transborda com durações `u32` por nó.
    pub total_duration: u64,
    /// Média aritmética das dificuldades dos nós.
    pub average_difficulty: f64,
    /// Disciplinas solicitadas, sem repetição.
    pub subjects: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Progresso 0-100, atualizado externamente.
    pub progress: u8,
    /// Média de todos os scores de recurso da trilha (0-100).
    pub match_score: f64,
}

impl LearningPath {
    /// Devolve uma cópia com o progresso atualizado.
    ///
    /// O valor é limitado a 100 e `updated_at` passa a ser agora.
    pub fn with_progress(&self, progress: u8) -> LearningPath {
        LearningPath {
            progress: progress.min(100),
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Número total de recursos em todos os nós.
    pub fn resource_count(&self) -> usize {
        self.nodes.iter().map(|n| n.resources.len()).sum()
    }

    /// Posição de um nó na trilha.
    pub fn position(&self, node_id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == node_id)
    }
}
