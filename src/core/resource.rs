//! # Resource: Material de Estudo Anexado a um Nó
//!
//! Um [`Resource`] é um **artefato de aprendizagem** (vídeo, artigo, quiz...)
//! pertencente a um [`KnowledgeNode`](super::KnowledgeNode). É imutável depois
//! de carregado do catálogo: o motor apenas lê seus campos.
//!
//! ## Afinidades de Estilo
//!
//! Cada recurso carrega quatro notas de afinidade (0 a 100), uma por
//! modalidade de aprendizagem:
//!
//! | Campo | Modalidade | Exemplo de recurso com nota alta |
//! |-------|------------|----------------------------------|
//! | `visual_score` | Visual | Animações, diagramas |
//! | `auditory_score` | Auditiva | Aulas narradas, podcasts |
//! | `reading_score` | Leitura | Artigos, e-books |
//! | `kinesthetic_score` | Cinestésica | Projetos, laboratórios |
//!
//! Essas notas são combinadas com os pesos do [`LearningStyle`](super::LearningStyle)
//! do usuário em [`match_score`](crate::engine::match_score).

use serde::{Deserialize, Serialize};

use super::style::StyleDimension;

/// Tipo do recurso: conjunto fechado de oito variantes.
///
/// Cada variante tem uma frase fixa de recomendação (veja [`ResourceType::reason`]).
/// O `match` é exaustivo: adicionar uma variante sem frase não compila.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Video,
    Article,
    Quiz,
    Exercise,
    Project,
    Interactive,
    Ebook,
    Course,
}

impl ResourceType {
    /// Todas as variantes, na ordem de declaração.
    pub const ALL: [ResourceType; 8] = [
        ResourceType::Video,
        ResourceType::Article,
        ResourceType::Quiz,
        ResourceType::Exercise,
        ResourceType::Project,
        ResourceType::Interactive,
        ResourceType::Ebook,
        ResourceType::Course,
    ];

    /// Frase de recomendação associada ao tipo do recurso.
    ///
    /// Usada como quinta regra da lista de motivos em
    /// [`RecommendationEngine`](crate::engine::RecommendationEngine).
    pub fn reason(&self) -> &'static str {
        match self {
            ResourceType::Video => "vivid and intuitive video explanations",
            ResourceType::Article => "in-depth written explanations",
            ResourceType::Quiz => "helps you check what you have learned",
            ResourceType::Exercise => "includes plenty of practice exercises",
            ResourceType::Project => "provides hands-on project experience",
            ResourceType::Interactive => "offers an immersive interactive learning experience",
            ResourceType::Ebook => "covers a complete and systematic body of knowledge",
            ResourceType::Course => "professionally designed course",
        }
    }

    /// Label curto, igual à forma serializada.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Video => "video",
            ResourceType::Article => "article",
            ResourceType::Quiz => "quiz",
            ResourceType::Exercise => "exercise",
            ResourceType::Project => "project",
            ResourceType::Interactive => "interactive",
            ResourceType::Ebook => "ebook",
            ResourceType::Course => "course",
        }
    }
}

/// Material de estudo pertencente a um nó de conhecimento.
///
/// Os campos seguem o formato JSON do catálogo (camelCase), de modo que
/// um catálogo exportado pelo frontend pode ser carregado diretamente via
/// [`Catalog::from_json`](crate::catalog::Catalog::from_json).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Identificador do recurso (único dentro do catálogo, por convenção).
    pub id: String,

    /// Título legível.
    pub title: String,

    /// Tipo do recurso: determina a frase fixa de recomendação.
    #[serde(rename = "type")]
    pub kind: ResourceType,

    /// Disciplina do recurso (normalmente igual à do nó dono).
    pub subject: String,

    /// Dificuldade de 1 (introdutório) a 5 (avançado).
    pub difficulty: u8,

    /// Duração estimada em minutos (sempre positiva).
    pub duration: u32,

    /// Afinidade com aprendizagem visual (0-100).
    pub visual_score: u8,

    /// Afinidade com aprendizagem auditiva (0-100).
    pub auditory_score: u8,

    /// Afinidade com aprendizagem por leitura (0-100).
    pub reading_score: u8,

    /// Afinidade com aprendizagem cinestésica/prática (0-100).
    pub kinesthetic_score: u8,

    /// Tags livres para busca e exibição.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Autor ou instituição responsável, quando conhecido.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Resource {
    /// Nota de afinidade do recurso em uma dimensão de estilo.
    pub fn affinity(&self, dimension: StyleDimension) -> u8 {
        match dimension {
            StyleDimension::Visual => self.visual_score,
            StyleDimension::Auditory => self.auditory_score,
            StyleDimension::Reading => self.reading_score,
            StyleDimension::Kinesthetic => self.kinesthetic_score,
        }
    }
}
