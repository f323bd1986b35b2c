//! # LearningSession: Contexto Explícito da Sessão
//!
//! O [`LearningSession`] é o objeto que a camada de apresentação segura: ele
//! **possui** o estado (catálogo, perfil ativo, trilha ativa) e delega os
//! cálculos ao motor, que permanece sem estado.
//!
//! ```text
//! LearningSession
//!   ├── catalog: Arc<Catalog>              (imutável, compartilhável)
//!   ├── preferences: PreferenceStore<S>    (perfil ativo + blob)
//!   ├── engine: PathEngine                 (puro)
//!   └── current_path: RwLock<Option<Arc<LearningPath>>>
//! ```
//!
//! ## Fluxo Típico
//!
//! ```text
//! load_preference("ana")          → perfil em branco ou o último salvo
//! save_preference(update)         → novo perfil ativo (+ blob)
//! generate_path(["Mathematics"])  → trilha ativa
//! recommend("math1")              → recursos ranqueados com motivos
//! update_progress(40)             → cópia da trilha com progresso novo
//! ```
//!
//! ## Concorrência
//!
//! Todas as operações recebem `&self`. Trilhas e perfis são substituídos
//! inteiros (`Arc`), então leitores nunca observam um registro pela metade.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::core::{LearningPath, Preference, PreferenceUpdate};
use crate::engine::{PathEngine, Recommendation, RecommendationEngine};
use crate::error::EngineError;
use crate::store::{BlobStorage, FileStorage, PreferenceStore};

/// Estado de uma sessão de estudo de um usuário.
pub struct LearningSession<S> {
    catalog: Arc<Catalog>,
    preferences: PreferenceStore<S>,
    engine: PathEngine,
    current_path: RwLock<Option<Arc<LearningPath>>>,
}

impl LearningSession<FileStorage> {
    /// Sessão com perfis persistidos em `config.data_dir`.
    pub fn open(config: &Config, catalog: Arc<Catalog>) -> Self {
        let storage = FileStorage::new(&config.data_dir);
        tracing::info!(
            data_dir = %config.data_dir.display(),
            nodes = catalog.len(),
            "Sessão de aprendizagem aberta"
        );
        Self::new(
            catalog,
            PreferenceStore::with_key(storage, config.storage_key.clone()),
            PathEngine::new(config.cycle_policy),
        )
    }
}

impl<S: BlobStorage> LearningSession<S> {
    pub fn new(catalog: Arc<Catalog>, preferences: PreferenceStore<S>, engine: PathEngine) -> Self {
        Self {
            catalog,
            preferences,
            engine,
            current_path: RwLock::new(None),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.preferences
    }

    /// Ativa o perfil do usuário (veja [`PreferenceStore::load`]).
    pub fn load_preference(&self, user_id: &str) -> Arc<Preference> {
        self.preferences.load(user_id)
    }

    /// Salva uma atualização parcial do perfil (veja [`PreferenceStore::save`]).
    pub fn save_preference(&self, update: PreferenceUpdate) -> bool {
        self.preferences.save(update)
    }

    /// Gera uma trilha com o perfil ativo e a guarda como trilha ativa.
    ///
    /// Em caso de erro a trilha ativa anterior é mantida.
    pub fn generate_path<T: AsRef<str>>(
        &self,
        subjects: &[T],
    ) -> Result<Arc<LearningPath>, EngineError> {
        let preference = self.preferences.current();
        let path = match self
            .engine
            .generate_path(&self.catalog, subjects, preference.as_deref())
        {
            Ok(path) => Arc::new(path),
            Err(e) => {
                tracing::warn!(error = %e, "Trilha não gerada");
                return Err(e);
            }
        };
        *self.current_path.write() = Some(path.clone());
        Ok(path)
    }

    /// Trilha ativa, se houver.
    pub fn current_path(&self) -> Option<Arc<LearningPath>> {
        self.current_path.read().clone()
    }

    /// Recursos do nó ranqueados para o perfil ativo.
    ///
    /// Lista vazia se não houver perfil ativo.
    ///
    /// # Erros
    ///
    /// [`EngineError::UnknownNode`] se `node_id` não existir no catálogo.
    pub fn recommend(&self, node_id: &str) -> Result<Vec<Recommendation>, EngineError> {
        let node = self
            .catalog
            .get(node_id)
            .ok_or_else(|| EngineError::UnknownNode {
                node_id: node_id.to_string(),
            })?;
        let preference = self.preferences.current();
        Ok(RecommendationEngine::recommend(node, preference.as_deref()))
    }

    /// Substitui a trilha ativa por uma cópia com o progresso dado (0-100).
    ///
    /// `None` se não houver trilha ativa.
    pub fn update_progress(&self, progress: u8) -> Option<Arc<LearningPath>> {
        let mut slot = self.current_path.write();
        let updated = Arc::new(slot.as_ref()?.with_progress(progress));
        *slot = Some(updated.clone());
        tracing::debug!(path = %updated.id, progress = updated.progress, "Progresso atualizado");
        Some(updated)
    }
}
