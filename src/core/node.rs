//! # KnowledgeNode: Unidade de Conhecimento do Catálogo
//!
//! Um [`KnowledgeNode`] é um tópico de estudo ("Introdução à Computação",
//! "Cálculo Básico") pertencente a uma disciplina. Nós se relacionam por
//! **pré-requisitos**: a ordenação topológica em
//! [`engine::ordering`](crate::engine::ordering) garante que todo
//! pré-requisito presente no conjunto de trabalho apareça antes do nó
//! que depende dele.
//!
//! ```text
//! cs1 (Introdução) ──► cs2 (Python) ──► cs4 (Estruturas de Dados)
//!                  └─► cs3 (Algoritmos)
//! ```
//!
//! A lista `next_nodes` é apenas informativa (navegação na interface) e
//! **não** participa da ordenação.

use serde::{Deserialize, Serialize};

use super::resource::Resource;

/// Tópico de estudo com pré-requisitos e recursos anexados.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeNode {
    /// Identificador único dentro do catálogo.
    pub id: String,

    /// Título legível.
    pub title: String,

    /// Disciplina usada no filtro de [`PathEngine::generate_path`](crate::engine::PathEngine::generate_path).
    pub subject: String,

    /// IDs dos nós que devem ser estudados antes deste.
    ///
    /// IDs que não existem no conjunto de trabalho são ignorados na ordenação.
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// IDs dos nós sugeridos depois deste (informativo).
    #[serde(default)]
    pub next_nodes: Vec<String>,

    /// Dificuldade de 1 a 5.
    pub difficulty: u8,

    /// Duração estimada do nó inteiro, em minutos.
    pub estimated_duration: u32,

    /// Recursos do nó, na ordem do catálogo.
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl KnowledgeNode {
    /// `true` se `id` aparece na lista de pré-requisitos deste nó.
    pub fn requires(&self, id: &str) -> bool {
        self.prerequisites.iter().any(|p| p == id)
    }
}
