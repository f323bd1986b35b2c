//! # Configuração
//!
//! Parâmetros de ambiente do [`LearningSession`](crate::session::LearningSession).
//! Tudo tem valor padrão; um arquivo JSON ou variáveis de ambiente podem
//! sobrescrever campos individuais.
//!
//! | Campo | Padrão | Variável de ambiente |
//! |-------|--------|----------------------|
//! | `data_dir` | `data` | `LEARNING_PATH_DATA_DIR` |
//! | `storage_key` | `learning_preferences` | `LEARNING_PATH_STORAGE_KEY` |
//! | `cycle_policy` | `permissive` | `LEARNING_PATH_CYCLE_POLICY` (`permissive` \| `strict`) |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::CyclePolicy;
use crate::store::DEFAULT_STORAGE_KEY;

pub const ENV_DATA_DIR: &str = "LEARNING_PATH_DATA_DIR";
pub const ENV_STORAGE_KEY: &str = "LEARNING_PATH_STORAGE_KEY";
pub const ENV_CYCLE_POLICY: &str = "LEARNING_PATH_CYCLE_POLICY";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Diretório do blob de perfis.
    pub data_dir: PathBuf,
    /// Chave (nome do arquivo, sem `.json`) do blob de perfis.
    pub storage_key: String,
    /// Tratamento de ciclos de pré-requisitos.
    pub cycle_policy: CyclePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            cycle_policy: CyclePolicy::default(),
        }
    }
}

impl Config {
    /// Lê a configuração de um arquivo JSON; campos ausentes usam o padrão.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Falha ao ler configuração {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Configuração inválida em {}", path.display()))
    }

    /// Padrões + variáveis de ambiente.
    ///
    /// Valor inválido em `LEARNING_PATH_CYCLE_POLICY` é logado e ignorado.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Aplica sobrescritas vindas de `lookup` (nome da variável → valor).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup(ENV_STORAGE_KEY) {
            self.storage_key = key;
        }
        if let Some(policy) = lookup(ENV_CYCLE_POLICY) {
            match policy.trim().to_ascii_lowercase().as_str() {
                "permissive" => self.cycle_policy = CyclePolicy::Permissive,
                "strict" => self.cycle_policy = CyclePolicy::Strict,
                other => {
                    tracing::warn!(value = %other, "{} inválido, mantendo {:?}", ENV_CYCLE_POLICY, self.cycle_policy)
                }
            }
        }
        self
    }
}
