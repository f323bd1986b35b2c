//! # Erros Tipados
//!
//! Taxonomia de falhas do sistema. Pontuação e ordenação são funções
//! totais e não aparecem aqui; só falham a montagem da trilha, a carga do
//! catálogo, a validação de perfis e o I/O do store.
//!
//! | Erro | Origem | Efeito para o chamador |
//! |------|--------|------------------------|
//! | [`EngineError::PreferenceMissing`] | `generate_path` sem perfil ativo | Sem trilha, mensagem explicativa |
//! | [`EngineError::EmptyNodeSet`] | Filtro de disciplinas vazio | Sem trilha (evita médias NaN) |
//! | [`EngineError::CyclicPrerequisites`] | Política estrita de ciclos | Sem trilha |
//! | [`StoreError::StorageFailure`] | Leitura/escrita do blob | Logado; perfil em memória continua válido |

use thiserror::Error;

/// Falhas do motor de trilhas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("no active learning preference; load or save a preference first")]
    PreferenceMissing,

    #[error("no catalog nodes match the requested subjects {subjects:?}")]
    EmptyNodeSet { subjects: Vec<String> },

    #[error("prerequisite cycle detected at node \"{node_id}\"")]
    CyclicPrerequisites { node_id: String },

    #[error("node \"{node_id}\" not found in catalog")]
    UnknownNode { node_id: String },
}

/// Falhas ao montar um [`Catalog`](crate::catalog::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate node id \"{0}\"")]
    DuplicateNodeId(String),

    #[error("{owner} \"{id}\" has difficulty {value}, expected 1-5")]
    InvalidDifficulty {
        owner: &'static str,
        id: String,
        value: u8,
    },

    #[error("{owner} \"{id}\" must have a positive duration")]
    InvalidDuration { owner: &'static str, id: String },

    #[error("resource \"{id}\" has {dimension} affinity {value}, expected 0-100")]
    InvalidAffinity {
        id: String,
        dimension: &'static str,
        value: u8,
    },

    #[error("failed to parse catalog JSON")]
    Parse(#[from] serde_json::Error),
}

/// Violações de limite em um perfil de aprendizagem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("{dimension} style weight must be finite and non-negative, got {value}")]
    InvalidStyleWeight { dimension: &'static str, value: f64 },

    #[error("{field} must be within 0-100, got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("subject weight for \"{subject}\" must be finite and non-negative, got {value}")]
    InvalidSubjectWeight { subject: String, value: f64 },
}

/// Falhas do [`PreferenceStore`](crate::store::PreferenceStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid preference: {0}")]
    Validation(#[from] ValidationError),

    #[error("no preference to update and no user id given")]
    MissingBase,

    #[error("preference storage failed: {0:#}")]
    StorageFailure(anyhow::Error),
}
