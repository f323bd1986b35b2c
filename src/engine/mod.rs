//! # Módulo Engine: Motor de Trilhas e Recomendações
//!
//! Funções puras sobre [`Catalog`](crate::catalog::Catalog) +
//! [`Preference`](crate::core::Preference). Nada aqui faz I/O ou guarda
//! estado entre chamadas.
//!
//! | Sub-módulo | Responsabilidade |
//! |------------|------------------|
//! | [`ordering`] | Ordenação topológica por pré-requisitos |
//! | [`scoring`] | Score linear recurso × estilo |
//! | [`path`] | Montagem do [`LearningPath`](crate::core::LearningPath) |
//! | [`recommend`] | Ranqueamento com motivos para um nó |

pub mod ordering;
pub mod path;
pub mod recommend;
pub mod scoring;

pub use ordering::{order, order_indices, order_with, CyclePolicy};
pub use path::PathEngine;
pub use recommend::{Recommendation, RecommendationEngine};
pub use scoring::match_score;
