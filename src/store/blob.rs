//! # Armazenamento de Blobs Chave-Valor
//!
//! Fronteira de I/O do sistema: o [`PreferenceStore`](super::PreferenceStore)
//! grava um único blob JSON sob uma chave fixa. O trait [`BlobStorage`]
//! isola o meio físico.
//!
//! | Implementação | Uso |
//! |---------------|-----|
//! | [`FileStorage`] | Um arquivo `<dir>/<chave>.json` por chave |
//! | [`MemoryStorage`] | Testes e hosts sem disco |
//!
//! ## Atomicidade
//!
//! [`FileStorage`] escreve em um arquivo temporário e renomeia por cima
//! do destino. Um crash no meio da escrita deixa o blob anterior intacto.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use parking_lot::Mutex;

/// Meio de persistência chave → texto.
///
/// Leitura e escrita são tudo-ou-nada: não há falha parcial.
pub trait BlobStorage: Send + Sync {
    /// Lê o blob da chave; `Ok(None)` se nunca foi gravado.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Substitui o blob da chave.
    fn write(&self, key: &str, blob: &str) -> Result<()>;
}

/// Blobs como arquivos JSON em um diretório.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Nenhum blob encontrado");
                Ok(None)
            }
            Err(e) => Err(e).with_context(|| format!("Falha ao ler {}", path.display())),
        }
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Falha ao criar diretório {}", self.dir.display()))?;
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&tmp, blob)
            .with_context(|| format!("Falha ao escrever {}", tmp.display()))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("Falha ao substituir {}", path.display()))?;
        Ok(())
    }
}

/// Blobs em memória, protegidos por `Mutex`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.lock().get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        self.blobs.lock().insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
