//! # Montagem da Trilha
//!
//! O [`PathEngine`] transforma disciplinas + perfil em um [`LearningPath`]:
//!
//! ```text
//! disciplinas ──► filtra catálogo ──► ordena (pré-requisitos) ──► pontua recursos
//!                                                                   │
//!                        LearningPath ◄── estatísticas + id + timestamps
//! ```
//!
//! ## Estatísticas
//!
//! | Campo | Cálculo |
//! |-------|---------|
//! | `total_duration` | Soma de `estimated_duration` dos nós |
//! | `average_difficulty` | Média aritmética das dificuldades dos nós |
//! | `match_score` | Média de todos os scores de recurso (achatada, não por nó) |
//!
//! Um filtro vazio é [`EngineError::EmptyNodeSet`]: as médias nunca são NaN.
//! Nós sem nenhum recurso dão `match_score = 0.0`.

use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use super::ordering::{order_indices, CyclePolicy};
use super::scoring::match_score;
use crate::catalog::Catalog;
use crate::core::{LearningPath, PathNode, Preference};
use crate::error::EngineError;

const PATH_DESCRIPTION: &str =
    "Learning path generated automatically from your learning preferences";

/// Motor de trilhas: sem estado além da política de ciclos.
///
/// Chamadas são reentrantes: nada é guardado entre uma trilha e outra.
/// Quem guarda a trilha ativa é o [`LearningSession`](crate::session::LearningSession).
#[derive(Clone, Copy, Debug, Default)]
pub struct PathEngine {
    cycle_policy: CyclePolicy,
}

impl PathEngine {
    pub fn new(cycle_policy: CyclePolicy) -> Self {
        Self { cycle_policy }
    }

    /// Gera uma trilha para as disciplinas pedidas.
    ///
    /// # Erros
    ///
    /// - [`EngineError::PreferenceMissing`] se `preference` for `None`
    /// - [`EngineError::EmptyNodeSet`] se nenhum nó do catálogo casar com `subjects`
    /// - [`EngineError::CyclicPrerequisites`] com [`CyclePolicy::Strict`] e um ciclo
    pub fn generate_path<S: AsRef<str>>(
        &self,
        catalog: &Catalog,
        subjects: &[S],
        preference: Option<&Preference>,
    ) -> Result<LearningPath, EngineError> {
        let preference = preference.ok_or(EngineError::PreferenceMissing)?;
        let subjects = dedup_subjects(subjects);

        let relevant = catalog.nodes_for_subjects(subjects.as_slice());
        if relevant.is_empty() {
            tracing::debug!(subjects = ?subjects, "Trilha: nenhum nó para as disciplinas");
            return Err(EngineError::EmptyNodeSet { subjects });
        }

        let style = &preference.learning_style;
        let nodes: Vec<PathNode> = order_indices(&relevant, self.cycle_policy)?
            .into_iter()
            .map(|i| PathNode::scored(relevant[i], |r| match_score(r, style)))
            .collect();

        let total_duration = nodes
            .iter()
            .map(|n| u64::from(n.estimated_duration))
            .sum();
        let average_difficulty =
            nodes.iter().map(|n| f64::from(n.difficulty)).sum::<f64>() / nodes.len() as f64;
        let match_score = mean(
            nodes
                .iter()
                .flat_map(|n| n.resources.iter().map(|r| r.match_score)),
        );

        let now = Utc::now();
        let path = LearningPath {
            id: Uuid::new_v4(),
            user_id: preference.user_id.clone(),
            title: format!("Personalized learning path - {}", subjects.join(", ")),
            description: PATH_DESCRIPTION.to_string(),
            nodes,
            total_duration,
            average_difficulty,
            subjects,
            created_at: now,
            updated_at: now,
            progress: 0,
            match_score,
        };

        tracing::info!(
            user = %path.user_id,
            nodes = path.nodes.len(),
            total_duration = path.total_duration,
            match_score = %format!("{:.1}", path.match_score),
            "Trilha gerada"
        );
        Ok(path)
    }
}

/// Remove disciplinas repetidas preservando a primeira ocorrência.
fn dedup_subjects<S: AsRef<str>>(subjects: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    subjects
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect()
}

/// Média aritmética; `0.0` para uma sequência vazia.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{node, resource};
    use crate::core::{LearningStyle, ResourceType};

    fn visual_preference() -> Preference {
        let mut pref = Preference::new("u1");
        pref.learning_style = LearningStyle::new(100.0, 0.0, 0.0, 0.0);
        pref
    }

    fn small_catalog() -> Catalog {
        let mut a = node("a", "Math", &[]);
        a.difficulty = 1;
        a.estimated_duration = 100;
        a.resources = vec![
            resource("a1", ResourceType::Video, [90, 0, 0, 0]),
            resource("a2", ResourceType::Article, [30, 0, 0, 0]),
        ];
        let mut b = node("b", "Math", &["a"]);
        b.difficulty = 4;
        b.estimated_duration = 50;
        b.resources = vec![resource("b1", ResourceType::Quiz, [60, 0, 0, 0])];
        let c = node("c", "Physics", &[]);
        // b antes de a no catálogo: a ordenação precisa inverter
        Catalog::new(vec![b, c, a]).unwrap()
    }

    #[test]
    fn missing_preference_is_an_error() {
        let err = PathEngine::default()
            .generate_path(&small_catalog(), &["Math"], None)
            .unwrap_err();
        assert_eq!(err, EngineError::PreferenceMissing);
    }

    #[test]
    fn empty_subject_list_is_an_error() {
        let pref = visual_preference();
        let err = PathEngine::default()
            .generate_path::<&str>(&small_catalog(), &[], Some(&pref))
            .unwrap_err();
        assert_eq!(err, EngineError::EmptyNodeSet { subjects: vec![] });
    }

    #[test]
    fn unknown_subject_is_an_error() {
        let pref = visual_preference();
        let err = PathEngine::default()
            .generate_path(&small_catalog(), &["Biology"], Some(&pref))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::EmptyNodeSet {
                subjects: vec!["Biology".into()]
            }
        );
    }

    #[test]
    fn path_orders_scores_and_aggregates() {
        let pref = visual_preference();
        let path = PathEngine::default()
            .generate_path(&small_catalog(), &["Math"], Some(&pref))
            .unwrap();

        let ids: Vec<&str> = path.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let scores: Vec<f64> = path.nodes[0].resources.iter().map(|r| r.match_score).collect();
        assert_eq!(scores, vec![90.0, 30.0]);
        assert_eq!(path.nodes[1].resources[0].match_score, 60.0);

        assert_eq!(path.total_duration, 150);
        assert_eq!(path.average_difficulty, 2.5);
        // Média achatada: (90 + 30 + 60) / 3, não média por nó
        assert_eq!(path.match_score, 60.0);
        assert_eq!(path.user_id, "u1");
        assert_eq!(path.progress, 0);
        assert_eq!(path.subjects, vec!["Math"]);
        assert_eq!(path.title, "Personalized learning path - Math");
        assert_eq!(path.created_at, path.updated_at);
    }

    #[test]
    fn nodes_without_resources_give_zero_match_score() {
        let pref = visual_preference();
        let path = PathEngine::default()
            .generate_path(&small_catalog(), &["Physics"], Some(&pref))
            .unwrap();
        assert_eq!(path.resource_count(), 0);
        assert_eq!(path.match_score, 0.0);
        assert_eq!(path.average_difficulty, 1.0);
    }

    #[test]
    fn repeated_subjects_are_collapsed() {
        let pref = visual_preference();
        let path = PathEngine::default()
            .generate_path(&small_catalog(), &["Math", "Physics", "Math"], Some(&pref))
            .unwrap();
        assert_eq!(path.subjects, vec!["Math", "Physics"]);
        assert_eq!(path.nodes.len(), 3);
        assert!(path.position("a").unwrap() < path.position("b").unwrap());
    }

    #[test]
    fn generation_is_deterministic_apart_from_identity() {
        let pref = visual_preference();
        let engine = PathEngine::default();
        let catalog = Catalog::seed().unwrap();
        let subjects = ["Computer Science", "Chemistry"];
        let first = engine.generate_path(&catalog, &subjects, Some(&pref)).unwrap();
        let second = engine.generate_path(&catalog, &subjects, Some(&pref)).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.match_score, second.match_score);
        assert_eq!(first.average_difficulty, second.average_difficulty);
        assert_eq!(first.total_duration, second.total_duration);
    }

    #[test]
    fn catalog_is_not_mutated() {
        let pref = visual_preference();
        let catalog = Catalog::seed().unwrap();
        let before = catalog.nodes().to_vec();
        PathEngine::default()
            .generate_path(&catalog, &["Computer Science"], Some(&pref))
            .unwrap();
        assert_eq!(catalog.nodes(), before.as_slice());
    }

    #[test]
    fn strict_engine_rejects_cyclic_catalog() {
        let catalog = Catalog::new(vec![node("x", "S", &["y"]), node("y", "S", &["x"])]).unwrap();
        let pref = visual_preference();

        let strict = PathEngine::new(CyclePolicy::Strict);
        assert!(matches!(
            strict.generate_path(&catalog, &["S"], Some(&pref)),
            Err(EngineError::CyclicPrerequisites { .. })
        ));

        let permissive = PathEngine::default();
        let path = permissive.generate_path(&catalog, &["S"], Some(&pref)).unwrap();
        assert_eq!(path.nodes.len(), 2);
    }

    #[test]
    fn total_duration_does_not_overflow_node_durations() {
        let mut long = node("long", "S", &[]);
        long.estimated_duration = u32::MAX;
        let mut short = node("short", "S", &["long"]);
        short.estimated_duration = 1;
        let catalog = Catalog::new(vec![long, short]).unwrap();

        let path = PathEngine::default()
            .generate_path(&catalog, &["S"], Some(&visual_preference()))
            .unwrap();
        assert_eq!(path.total_duration, u64::from(u32::MAX) + 1);
    }

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(std::iter::empty()), 0.0);
        assert_eq!(mean([1.0, 2.0, 6.0].into_iter()), 3.0);
    }
}
