//! # Módulo Core: Modelo de Dados
//!
//! Tipos que descrevem o catálogo, o perfil do usuário e os valores
//! produzidos pelo motor:
//!
//! - [`Resource`] / [`ResourceType`]: material de estudo e seu tipo
//! - [`KnowledgeNode`]: tópico com pré-requisitos e recursos
//! - [`LearningStyle`] / [`StyleDimension`]: pesos de modalidade do usuário
//! - [`Preference`] / [`PreferenceUpdate`]: perfil completo e atualização parcial
//! - [`LearningPath`] / [`PathNode`] / [`ScoredResource`]: trilha gerada
//!
//! O catálogo é dono de recursos e nós; a trilha guarda cópias pontuadas.
//! O perfil pertence ao [`PreferenceStore`](crate::store::PreferenceStore):
//! o motor só lê.

pub mod node;
pub mod path;
pub mod preference;
pub mod resource;
pub mod style;

pub use node::KnowledgeNode;
pub use path::{LearningPath, PathId, PathNode, ScoredResource};
pub use preference::{AnswerValue, Preference, PreferenceId, PreferenceUpdate, TimePreference};
pub use resource::{Resource, ResourceType};
pub use style::{LearningStyle, StyleDimension};
