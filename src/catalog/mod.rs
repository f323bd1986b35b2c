//! # Catalog: Grafo Estático de Conhecimento
//!
//! O [`Catalog`] guarda os [`KnowledgeNode`]s e seus recursos. É **somente
//! leitura** do ponto de vista do motor: depois de construído, nada o altera,
//! por isso pode ser compartilhado livremente via `Arc<Catalog>`.
//!
//! ## Armazenamento
//!
//! - **Nós**: `Vec<KnowledgeNode>`: preserva a ordem do catálogo, que
//!   desempata a ordenação topológica
//! - **Índice**: `HashMap<String, usize>`: busca O(1) por ID
//!
//! ## Validação
//!
//! [`Catalog::new`] rejeita IDs duplicados, dificuldades fora de 1-5,
//! durações zeradas e afinidades acima de 100. Pré-requisitos que apontam
//! para nós inexistentes são aceitos (a ordenação os ignora) e apenas
//! registrados em log.
//!
//! ## Exemplo
//!
//! ```rust
//! use learning_path::Catalog;
//!
//! let catalog = Catalog::seed().unwrap();
//! assert!(catalog.get("cs1").is_some());
//! ```

mod seed;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::Context;

use crate::core::{KnowledgeNode, Resource, StyleDimension};
use crate::error::CatalogError;

/// Coleção imutável de nós de conhecimento.
#[derive(Clone, Debug)]
pub struct Catalog {
    nodes: Vec<KnowledgeNode>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Valida e indexa uma coleção de nós.
    ///
    /// # Erros
    ///
    /// [`CatalogError`] no primeiro nó ou recurso inválido encontrado.
    pub fn new(nodes: Vec<KnowledgeNode>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            validate_node(node)?;
            if index.insert(node.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateNodeId(node.id.clone()));
            }
        }

        for node in &nodes {
            for missing in node.prerequisites.iter().filter(|p| !index.contains_key(*p)) {
                tracing::debug!(node = %node.id, prerequisite = %missing, "Catálogo: pré-requisito inexistente");
            }
        }

        tracing::debug!(nodes = nodes.len(), "Catálogo carregado");
        Ok(Self { nodes, index })
    }

    /// Catálogo de demonstração embutido (computação, matemática, física, química).
    ///
    /// Passa pela mesma validação de [`Catalog::new`].
    pub fn seed() -> Result<Self, CatalogError> {
        Self::new(seed::nodes())
    }

    /// Lê um array JSON de nós.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let nodes: Vec<KnowledgeNode> = serde_json::from_str(json)?;
        Self::new(nodes)
    }

    /// Carrega o catálogo de um arquivo JSON em disco.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Falha ao ler catálogo {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Catálogo inválido em {}", path.display()))
    }

    /// Todos os nós, na ordem do catálogo.
    pub fn nodes(&self) -> &[KnowledgeNode] {
        &self.nodes
    }

    /// Busca um nó pelo ID.
    pub fn get(&self, id: &str) -> Option<&KnowledgeNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Nós cujas disciplinas estão em `subjects`, na ordem do catálogo.
    pub fn nodes_for_subjects<S: AsRef<str>>(&self, subjects: &[S]) -> Vec<&KnowledgeNode> {
        let wanted: HashSet<&str> = subjects.iter().map(|s| s.as_ref()).collect();
        self.nodes
            .iter()
            .filter(|n| wanted.contains(n.subject.as_str()))
            .collect()
    }

    /// Disciplinas distintas, na ordem em que aparecem pela primeira vez.
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .map(|n| n.subject.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn validate_node(node: &KnowledgeNode) -> Result<(), CatalogError> {
    check_difficulty("node", &node.id, node.difficulty)?;
    if node.estimated_duration == 0 {
        return Err(CatalogError::InvalidDuration {
            owner: "node",
            id: node.id.clone(),
        });
    }
    node.resources.iter().try_for_each(validate_resource)
}

fn validate_resource(resource: &Resource) -> Result<(), CatalogError> {
    check_difficulty("resource", &resource.id, resource.difficulty)?;
    if resource.duration == 0 {
        return Err(CatalogError::InvalidDuration {
            owner: "resource",
            id: resource.id.clone(),
        });
    }
    for dimension in StyleDimension::ALL {
        let value = resource.affinity(dimension);
        if value > 100 {
            return Err(CatalogError::InvalidAffinity {
                id: resource.id.clone(),
                dimension: dimension.label(),
                value,
            });
        }
    }
    Ok(())
}

fn check_difficulty(owner: &'static str, id: &str, value: u8) -> Result<(), CatalogError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(CatalogError::InvalidDifficulty {
            owner,
            id: id.to_string(),
            value,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::ResourceType;

    /// Nó mínimo para testes: dificuldade 1, 60 minutos, sem recursos.
    pub(crate) fn node(id: &str, subject: &str, prerequisites: &[&str]) -> KnowledgeNode {
        KnowledgeNode {
            id: id.to_string(),
            title: format!("Node {id}"),
            subject: subject.to_string(),
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
            next_nodes: Vec::new(),
            difficulty: 1,
            estimated_duration: 60,
            resources: Vec::new(),
        }
    }

    /// Recurso mínimo para testes com as quatro afinidades dadas.
    pub(crate) fn resource(id: &str, kind: ResourceType, scores: [u8; 4]) -> Resource {
        Resource {
            id: id.to_string(),
            title: format!("Resource {id}"),
            kind,
            subject: "Test".to_string(),
            difficulty: 3,
            duration: 30,
            visual_score: scores[0],
            auditory_score: scores[1],
            reading_score: scores[2],
            kinesthetic_score: scores[3],
            tags: Vec::new(),
            author: None,
        }
    }

    #[test]
    fn seed_catalog_is_valid() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.subjects(),
            vec!["Computer Science", "Mathematics", "Physics", "Chemistry"]
        );
        assert!(catalog.get("cs2").unwrap().requires("cs1"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let nodes = vec![node("a", "S", &[]), node("a", "S", &[])];
        assert!(matches!(
            Catalog::new(nodes),
            Err(CatalogError::DuplicateNodeId(id)) if id == "a"
        ));
    }

    #[test]
    fn invalid_difficulty_is_rejected() {
        let mut bad = node("a", "S", &[]);
        bad.difficulty = 6;
        assert!(matches!(
            Catalog::new(vec![bad]),
            Err(CatalogError::InvalidDifficulty { value: 6, .. })
        ));
    }

    #[test]
    fn affinity_above_100_is_rejected() {
        let mut n = node("a", "S", &[]);
        n.resources
            .push(resource("r", ResourceType::Quiz, [10, 101, 0, 0]));
        assert!(matches!(
            Catalog::new(vec![n]),
            Err(CatalogError::InvalidAffinity { dimension: "auditory", .. })
        ));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut n = node("a", "S", &[]);
        n.estimated_duration = 0;
        assert!(matches!(
            Catalog::new(vec![n]),
            Err(CatalogError::InvalidDuration { owner: "node", .. })
        ));
    }

    #[test]
    fn dangling_prerequisites_are_accepted() {
        let catalog = Catalog::new(vec![node("b", "S", &["missing"])]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn subject_filter_keeps_catalog_order() {
        let catalog = Catalog::new(vec![
            node("m1", "Math", &[]),
            node("p1", "Physics", &[]),
            node("m2", "Math", &["m1"]),
            node("c1", "Chemistry", &[]),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog
            .nodes_for_subjects(&["Math", "Chemistry"])
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["m1", "m2", "c1"]);
        assert!(catalog.nodes_for_subjects::<&str>(&[]).is_empty());
    }

    #[test]
    fn catalog_reads_json_array() {
        let json = r#"[
            {"id": "a", "title": "A", "subject": "S", "difficulty": 2, "estimatedDuration": 30},
            {"id": "b", "title": "B", "subject": "S", "prerequisites": ["a"],
             "difficulty": 3, "estimatedDuration": 45, "resources": []}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("b").unwrap().prerequisites, vec!["a"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn load_reads_catalog_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(Catalog::seed().unwrap().nodes()).unwrap();
        std::fs::write(&path, json).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 5);
        assert!(Catalog::load(dir.path().join("missing.json")).is_err());
    }
}
