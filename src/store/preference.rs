//! # PreferenceStore: Perfil Ativo e Histórico Persistido
//!
//! Guarda o **perfil ativo** da sessão e a lista de perfis salvos, persistida
//! como um único blob JSON (array, mais recente primeiro) sob uma chave fixa.
//!
//! ## Copy-on-Write
//!
//! Perfis são compartilhados como `Arc<Preference>` e **substituídos
//! inteiros**, nunca mutados campo a campo. Leitores concorrentes sempre
//! veem um registro completo. Operações de substituição (`load`, `save`,
//! `select`) são serializadas por um único lock de escrita.
//!
//! ## Falhas de Persistência
//!
//! | Operação | Falha no blob | Estado em memória |
//! |----------|---------------|-------------------|
//! | `load` | Logada como `warn` | Lista salva anterior é mantida |
//! | `save` | Logada, retorna `false` | Novo perfil **continua ativo** |
//!
//! A persistência é best-effort: o perfil recém-calculado vale até o fim
//! da sessão mesmo que o disco falhe.

use std::sync::Arc;

use anyhow::Context;
use parking_lot::{Mutex, RwLock};

use super::blob::BlobStorage;
use crate::core::{Preference, PreferenceId, PreferenceUpdate};
use crate::error::StoreError;

/// Chave padrão do blob de perfis.
pub const DEFAULT_STORAGE_KEY: &str = "learning_preferences";

/// Store do perfil de aprendizagem sobre um [`BlobStorage`].
pub struct PreferenceStore<S> {
    storage: S,
    key: String,
    current: RwLock<Option<Arc<Preference>>>,
    saved: RwLock<Vec<Arc<Preference>>>,
    writer: Mutex<()>,
}

impl<S: BlobStorage> PreferenceStore<S> {
    /// Cria o store com a chave padrão ([`DEFAULT_STORAGE_KEY`]).
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            current: RwLock::new(None),
            saved: RwLock::new(Vec::new()),
            writer: Mutex::new(()),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Perfil ativo, se houver.
    pub fn current(&self) -> Option<Arc<Preference>> {
        self.current.read().clone()
    }

    /// `true` quando existe um perfil ativo.
    pub fn is_complete(&self) -> bool {
        self.current.read().is_some()
    }

    /// Perfis salvos, mais recente primeiro.
    pub fn saved(&self) -> Vec<Arc<Preference>> {
        self.saved.read().clone()
    }

    /// Ativa o perfil do usuário.
    ///
    /// Recarrega a lista salva do blob e ativa o perfil mais recente de
    /// `user_id`; sem nenhum, ativa um perfil em branco
    /// ([`Preference::new`]). Nunca falha: erro de leitura é logado e a
    /// lista em memória anterior é mantida.
    pub fn load(&self, user_id: &str) -> Arc<Preference> {
        let _writer = self.writer.lock();

        match self.read_saved() {
            Ok(list) => *self.saved.write() = list,
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), key = %self.key, "Falha ao carregar perfis salvos, mantendo lista em memória")
            }
        }

        let preference = self
            .saved
            .read()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned()
            .unwrap_or_else(|| {
                tracing::debug!(user = %user_id, "Nenhum perfil salvo, iniciando em branco");
                Arc::new(Preference::new(user_id))
            });

        *self.current.write() = Some(preference.clone());
        tracing::info!(user = %user_id, preference = %preference.id, "Perfil ativo carregado");
        preference
    }

    /// Aplica uma atualização parcial; `true` se o perfil foi salvo e persistido.
    ///
    /// Qualquer erro é logado. Veja [`PreferenceStore::try_save`] para o
    /// erro tipado.
    pub fn save(&self, update: PreferenceUpdate) -> bool {
        match self.try_save(update) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Falha ao salvar perfil de aprendizagem");
                false
            }
        }
    }

    /// Aplica uma atualização parcial e persiste a lista de perfis.
    ///
    /// Passos: base (perfil ativo, ou em branco para `update.user_id`) →
    /// [`Preference::merged`] → vira o perfil ativo → entra no topo da lista
    /// salva → lista gravada no blob.
    ///
    /// # Erros
    ///
    /// - [`StoreError::MissingBase`]: sem perfil ativo e sem `user_id` no update
    /// - [`StoreError::Validation`]: o perfil resultante é inválido; nada muda
    /// - [`StoreError::StorageFailure`]: o blob não pôde ser gravado; o novo
    ///   perfil **já está ativo** em memória
    pub fn try_save(&self, update: PreferenceUpdate) -> Result<Arc<Preference>, StoreError> {
        let _writer = self.writer.lock();

        let base = match (self.current(), &update.user_id) {
            (Some(current), _) => (*current).clone(),
            (None, Some(user_id)) => Preference::new(user_id.clone()),
            (None, None) => return Err(StoreError::MissingBase),
        };
        let next = Arc::new(base.merged(update)?);

        *self.current.write() = Some(next.clone());
        let list = {
            let mut saved = self.saved.write();
            let mut list = Vec::with_capacity(saved.len() + 1);
            list.push(next.clone());
            list.extend(saved.iter().cloned());
            *saved = list.clone();
            list
        };

        self.write_saved(&list).map_err(StoreError::StorageFailure)?;
        tracing::info!(user = %next.user_id, preference = %next.id, saved = list.len(), "Perfil salvo");
        Ok(next)
    }

    /// Ativa um perfil já salvo, substituindo o atual.
    pub fn select(&self, id: PreferenceId) -> Option<Arc<Preference>> {
        let _writer = self.writer.lock();
        let found = self.saved.read().iter().find(|p| p.id == id).cloned()?;
        *self.current.write() = Some(found.clone());
        Some(found)
    }

    fn read_saved(&self) -> anyhow::Result<Vec<Arc<Preference>>> {
        let Some(blob) = self.storage.read(&self.key)? else {
            return Ok(Vec::new());
        };
        let records: Vec<Preference> = serde_json::from_str(&blob)
            .with_context(|| format!("Falha ao desserializar blob \"{}\"", self.key))?;
        Ok(records.into_iter().map(Arc::new).collect())
    }

    fn write_saved(&self, list: &[Arc<Preference>]) -> anyhow::Result<()> {
        let records: Vec<&Preference> = list.iter().map(|p| p.as_ref()).collect();
        let json = serde_json::to_string_pretty(&records)
            .context("Falha ao serializar perfis")?;
        self.storage.write(&self.key, &json)
    }
}
