//! # Recomendações Explicadas
//!
//! O [`RecommendationEngine`] ranqueia os recursos de **um** nó pelo score
//! de compatibilidade e anexa a cada um a lista de motivos legíveis.
//!
//! ## Regras de Motivo (ordem fixa)
//!
//! | # | Condição | Motivo |
//! |---|----------|--------|
//! | 1 | afinidade visual ≥ 80 **e** peso visual ≥ 70 | "fits visual learning style" |
//! | 2 | afinidade auditiva ≥ 80 **e** peso auditivo ≥ 70 | "fits auditory learning style" |
//! | 3 | afinidade de leitura ≥ 80 **e** peso de leitura ≥ 70 | "fits reading learning style" |
//! | 4 | afinidade cinestésica ≥ 80 **e** peso cinestésico ≥ 70 | "fits kinesthetic learning style" |
//! | 5 | sempre | frase do [`ResourceType`](crate::core::ResourceType) |
//! | 6 | dificuldade ≤ 2 | "suitable for beginners" |
//! | 7 | autor presente | "quality content from {autor}" |
//!
//! As regras são independentes: cada uma que vale acrescenta seu motivo.
//!
//! ## Ordenação
//!
//! Score decrescente. Empates mantêm a ordem do catálogo (`sort_by` é estável).
//!
//! ## Sem Perfil Ativo
//!
//! Diferente de [`PathEngine::generate_path`](super::PathEngine::generate_path),
//! que falha, `recommend` sem perfil devolve lista vazia.

use serde::{Deserialize, Serialize};

use super::scoring::match_score;
use crate::core::{KnowledgeNode, LearningStyle, Preference, Resource, StyleDimension};

/// Afinidade mínima do recurso para as regras de estilo (1-4).
pub const AFFINITY_THRESHOLD: u8 = 80;

/// Peso mínimo do usuário para as regras de estilo (1-4).
pub const WEIGHT_THRESHOLD: f64 = 70.0;

/// Dificuldade máxima considerada introdutória (regra 6).
pub const BEGINNER_MAX_DIFFICULTY: u8 = 2;

pub const BEGINNER_REASON: &str = "suitable for beginners";

/// Recurso recomendado, com score e motivos. Efêmero: nunca persistido.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub resource: Resource,
    pub match_score: f64,
    pub reasons: Vec<String>,
}

/// Ranqueador de recursos: struct sem estado.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Ranqueia os recursos de `node` para o perfil dado.
    ///
    /// Devolve lista vazia quando `preference` é `None`.
    pub fn recommend(node: &KnowledgeNode, preference: Option<&Preference>) -> Vec<Recommendation> {
        let Some(preference) = preference else {
            tracing::debug!(node = %node.id, "Recomendação: sem perfil ativo");
            return Vec::new();
        };
        let style = &preference.learning_style;

        let mut ranked: Vec<Recommendation> = node
            .resources
            .iter()
            .map(|resource| Recommendation {
                resource: resource.clone(),
                match_score: match_score(resource, style),
                reasons: Self::reasons(resource, style),
            })
            .collect();

        ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        tracing::debug!(node = %node.id, resources = ranked.len(), "Recomendações geradas");
        ranked
    }

    /// Motivos legíveis para um recurso, na ordem fixa das regras.
    pub fn reasons(resource: &Resource, style: &LearningStyle) -> Vec<String> {
        let mut reasons: Vec<String> = StyleDimension::ALL
            .iter()
            .filter(|&&d| {
                resource.affinity(d) >= AFFINITY_THRESHOLD && style.weight(d) >= WEIGHT_THRESHOLD
            })
            .map(|d| format!("fits {} learning style", d.label()))
            .collect();

        reasons.push(resource.kind.reason().to_string());

        if resource.difficulty <= BEGINNER_MAX_DIFFICULTY {
            reasons.push(BEGINNER_REASON.to_string());
        }
        if let Some(author) = &resource.author {
            reasons.push(format!("quality content from {author}"));
        }
        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{node, resource};
    use crate::core::ResourceType;

    fn preference(style: LearningStyle) -> Preference {
        let mut pref = Preference::new("u1");
        pref.learning_style = style;
        pref
    }

    // ─── regras de motivo ──────────────────────────────────────

    #[test]
    fn beginner_video_with_author_gets_all_four_reasons() {
        let mut r = resource("r", ResourceType::Video, [90, 10, 10, 10]);
        r.difficulty = 1;
        r.author = Some("X".into());
        let style = LearningStyle::new(80.0, 0.0, 0.0, 0.0);

        assert_eq!(
            RecommendationEngine::reasons(&r, &style),
            vec![
                "fits visual learning style".to_string(),
                ResourceType::Video.reason().to_string(),
                "suitable for beginners".to_string(),
                "quality content from X".to_string(),
            ]
        );
    }

    #[test]
    fn style_rules_require_both_thresholds() {
        let r = resource("r", ResourceType::Quiz, [80, 79, 100, 80]);
        // visual: 80/70 ✓   auditory: 79 ✗   reading: peso 69 ✗   kinesthetic: 80/70 ✓
        let style = LearningStyle::new(70.0, 100.0, 69.0, 70.0);

        assert_eq!(
            RecommendationEngine::reasons(&r, &style),
            vec![
                "fits visual learning style",
                "fits kinesthetic learning style",
                ResourceType::Quiz.reason(),
            ]
        );
    }

    #[test]
    fn all_style_rules_fire_in_fixed_order() {
        let r = resource("r", ResourceType::Course, [100, 100, 100, 100]);
        let style = LearningStyle::new(100.0, 100.0, 100.0, 100.0);
        assert_eq!(
            RecommendationEngine::reasons(&r, &style),
            vec![
                "fits visual learning style",
                "fits auditory learning style",
                "fits reading learning style",
                "fits kinesthetic learning style",
                ResourceType::Course.reason(),
            ]
        );
    }

    #[test]
    fn type_phrase_is_always_present() {
        let style = LearningStyle::default();
        for kind in ResourceType::ALL {
            let r = resource("r", kind, [0, 0, 0, 0]);
            assert_eq!(RecommendationEngine::reasons(&r, &style), vec![kind.reason()]);
        }
    }

    #[test]
    fn difficulty_boundary_for_beginners() {
        let style = LearningStyle::default();
        let mut r = resource("r", ResourceType::Article, [0, 0, 0, 0]);
        r.difficulty = 2;
        assert!(RecommendationEngine::reasons(&r, &style).contains(&BEGINNER_REASON.to_string()));
        r.difficulty = 3;
        assert!(!RecommendationEngine::reasons(&r, &style).contains(&BEGINNER_REASON.to_string()));
    }

    // ─── ranqueamento ──────────────────────────────────────────

    #[test]
    fn no_preference_yields_no_recommendations() {
        let mut n = node("n", "S", &[]);
        n.resources
            .push(resource("r", ResourceType::Video, [90, 0, 0, 0]));
        assert!(RecommendationEngine::recommend(&n, None).is_empty());
    }

    #[test]
    fn recommendations_sorted_by_descending_score() {
        let mut n = node("n", "S", &[]);
        n.resources = vec![
            resource("low", ResourceType::Video, [10, 0, 0, 0]),
            resource("high", ResourceType::Video, [95, 0, 0, 0]),
            resource("mid", ResourceType::Video, [50, 0, 0, 0]),
        ];
        let pref = preference(LearningStyle::new(100.0, 0.0, 0.0, 0.0));
        let ranked = RecommendationEngine::recommend(&n, Some(&pref));

        let ids: Vec<&str> = ranked.iter().map(|r| r.resource.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
        assert_eq!(ranked[0].match_score, 95.0);
        for pair in ranked.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn huge_style_weights_still_rank_by_score() {
        let mut n = node("n", "S", &[]);
        n.resources = vec![
            resource("listen", ResourceType::Video, [10, 90, 0, 0]),
            resource("watch", ResourceType::Video, [90, 90, 0, 0]),
        ];
        let pref = preference(LearningStyle::new(f64::MAX, f64::MAX, 0.0, 0.0));
        let ranked = RecommendationEngine::recommend(&n, Some(&pref));

        assert!(ranked.iter().all(|r| r.match_score.is_finite()));
        assert_eq!(ranked[0].resource.id, "watch");
        assert_eq!(ranked[0].match_score, 90.0);
        assert_eq!(ranked[1].match_score, 50.0);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let mut n = node("n", "S", &[]);
        n.resources = vec![
            resource("first", ResourceType::Quiz, [40, 0, 0, 0]),
            resource("best", ResourceType::Quiz, [90, 0, 0, 0]),
            resource("second", ResourceType::Article, [40, 0, 0, 0]),
            resource("third", ResourceType::Project, [40, 0, 0, 0]),
        ];
        let pref = preference(LearningStyle::new(100.0, 0.0, 0.0, 0.0));
        let ids: Vec<String> = RecommendationEngine::recommend(&n, Some(&pref))
            .into_iter()
            .map(|r| r.resource.id)
            .collect();
        assert_eq!(ids, vec!["best", "first", "second", "third"]);
    }

    #[test]
    fn unset_style_scores_zero_and_keeps_order() {
        let mut n = node("n", "S", &[]);
        n.resources = vec![
            resource("a", ResourceType::Video, [90, 90, 90, 90]),
            resource("b", ResourceType::Video, [10, 10, 10, 10]),
        ];
        let pref = Preference::new("u1");
        let ranked = RecommendationEngine::recommend(&n, Some(&pref));
        assert!(ranked.iter().all(|r| r.match_score == 0.0));
        assert_eq!(ranked[0].resource.id, "a");
    }
}
