//! # Learning Path: Trilhas de Estudo por Estilo de Aprendizagem
//!
//! Biblioteca que recomenda conteúdo **ordenado** para um usuário a partir do
//! seu perfil de aprendizagem declarado.
//!
//! Dado um catálogo de nós de conhecimento (com pré-requisitos e recursos
//! anexados) e os pesos de estilo do usuário, o motor:
//!
//! 1. **Ordena** os nós de forma que pré-requisitos venham antes dos dependentes
//! 2. **Pontua** cada recurso contra os pesos de estilo (modelo linear fixo)
//! 3. **Agrega** estatísticas da trilha (duração, dificuldade, compatibilidade)
//! 4. **Recomenda** os recursos de um nó, ranqueados e com motivos legíveis
//!
//! ## Arquitetura
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐
//! │ Catalog      │   │ PreferenceStore  │──► BlobStorage (arquivo / memória)
//! │ (imutável)   │   │ (perfil ativo)   │
//! └──────┬───────┘   └────────┬─────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌──────────────────────────────────────┐
//! │ engine (puro)                        │
//! │  ordering → scoring → PathEngine     │
//! │  RecommendationEngine                │
//! └──────────────────┬───────────────────┘
//!                    ▼
//!            LearningSession (trilha ativa)
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use learning_path::{
//!     Catalog, LearningSession, LearningStyle, MemoryStorage, PathEngine,
//!     PreferenceStore, PreferenceUpdate,
//! };
//!
//! let session = LearningSession::new(
//!     Arc::new(Catalog::seed().unwrap()),
//!     PreferenceStore::new(MemoryStorage::new()),
//!     PathEngine::default(),
//! );
//!
//! session.load_preference("ana");
//! session.save_preference(PreferenceUpdate {
//!     learning_style: Some(LearningStyle::new(90.0, 20.0, 40.0, 60.0)),
//!     ..Default::default()
//! });
//!
//! let path = session.generate_path(&["Computer Science"]).unwrap();
//! assert_eq!(path.nodes[0].id, "cs1");
//!
//! let recommendations = session.recommend("cs2").unwrap();
//! assert_eq!(recommendations.len(), 2);
//! ```
//!
//! ## Logs
//!
//! Todos os módulos emitem eventos via `tracing`. Hosts sem subscriber
//! próprio podem chamar [`init_tracing`], que respeita `RUST_LOG`
//! (padrão `info`).

/// Módulo `catalog`: grafo estático de nós e recursos.
pub mod catalog;

/// Módulo `config`: parâmetros da sessão (diretório, chave, política de ciclos).
pub mod config;

/// Módulo `core`: modelo de dados: recursos, nós, perfis, trilhas.
pub mod core;

/// Módulo `engine`: ordenação, pontuação, montagem de trilhas e recomendações.
pub mod engine;

/// Módulo `error`: erros tipados.
pub mod error;

/// Módulo `session`: contexto explícito que possui o estado da sessão.
pub mod session;

/// Módulo `store`: persistência do perfil em blob chave-valor.
pub mod store;

use tracing_subscriber::EnvFilter;

pub use crate::catalog::Catalog;
pub use crate::config::Config;
pub use crate::core::{
    AnswerValue, KnowledgeNode, LearningPath, LearningStyle, PathNode, Preference,
    PreferenceUpdate, Resource, ResourceType, ScoredResource, StyleDimension, TimePreference,
};
pub use crate::engine::{
    match_score, order, order_with, CyclePolicy, PathEngine, Recommendation,
    RecommendationEngine,
};
pub use crate::error::{CatalogError, EngineError, StoreError, ValidationError};
pub use crate::session::LearningSession;
pub use crate::store::{BlobStorage, FileStorage, MemoryStorage, PreferenceStore};

/// Instala um subscriber `tracing` formatado, filtrado por `RUST_LOG`.
///
/// Aceita a variável de ambiente RUST_LOG para configurar o nível.
/// Exemplo: `RUST_LOG=learning_path=debug`
///
/// Retorna `false` se já havia um subscriber global (chamadas repetidas
/// são inofensivas).
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .is_ok()
}
