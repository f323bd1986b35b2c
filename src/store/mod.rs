//! # Módulo Store: Persistência do Perfil
//!
//! Única fronteira de I/O do sistema. O motor nunca toca em disco; quem
//! lê e grava perfis é o [`PreferenceStore`], sobre um [`BlobStorage`].

pub mod blob;
pub mod preference;

pub use blob::{BlobStorage, FileStorage, MemoryStorage};
pub use preference::{PreferenceStore, DEFAULT_STORAGE_KEY};
