//! # Score de Compatibilidade Recurso × Estilo
//!
//! Modelo linear fixo: média das quatro afinidades do recurso ponderada
//! pelos pesos de estilo do usuário.
//!
//! ```text
//!         Σ peso_i × afinidade_i
//! score = ──────────────────────     i ∈ {visual, auditory, reading, kinesthetic}
//!              Σ peso_i
//! ```
//!
//! Os pesos são divididos pelo maior deles antes das somas, então o
//! denominador fica em `[1, 4]` e pesos enormes (até `f64::MAX`) não
//! transbordam para `inf`. A razão é a mesma da fórmula acima.
//!
//! Se todos os pesos forem zero o score é **0**: um perfil não preenchido
//! produz compatibilidade zero, nunca NaN. Pesos negativos ou não finitos
//! (rejeitados por [`LearningStyle::validate`]) contam como zero.
//!
//! Com afinidades em `[0, 100]` o resultado também fica em `[0, 100]`.

use crate::core::{LearningStyle, Resource, StyleDimension};

/// Compatibilidade (0-100) entre um recurso e um estilo de aprendizagem.
///
/// Função pura, sem efeitos colaterais.
///
/// # Exemplo
///
/// ```rust
/// use learning_path::{match_score, Catalog, LearningStyle};
///
/// let catalog = Catalog::seed().unwrap();
/// let video = &catalog.get("cs1").unwrap().resources[0];
/// let visual_only = LearningStyle::new(100.0, 0.0, 0.0, 0.0);
/// assert_eq!(match_score(video, &visual_only), 95.0);
/// ```
pub fn match_score(resource: &Resource, style: &LearningStyle) -> f64 {
    let weight = |d: StyleDimension| {
        let w = style.weight(d);
        if w.is_finite() && w > 0.0 {
            w
        } else {
            0.0
        }
    };
    let peak = StyleDimension::ALL.iter().map(|&d| weight(d)).fold(0.0, f64::max);
    if peak == 0.0 {
        return 0.0;
    }

    let (weighted, total) = StyleDimension::ALL
        .iter()
        .fold((0.0, 0.0), |(weighted, total), &d| {
            let w = weight(d) / peak;
            (weighted + w * f64::from(resource.affinity(d)), total + w)
        });

    (weighted / total).min(100.0)
}
