//! # Ordenação Topológica por Pré-requisitos
//!
//! Ordena um conjunto de nós de modo que todo pré-requisito **presente no
//! conjunto** apareça antes do nó que depende dele.
//!
//! ## Algoritmo
//!
//! Busca em profundidade **iterativa** (pilha explícita, sem recursão) com
//! marcação de visita:
//!
//! ```text
//! para cada nó na ordem original:
//!   se não visitado:
//!     visitar pré-requisitos presentes (na ordem declarada)
//!     marcar visitado
//!     anexar ao resultado
//! ```
//!
//! A ordem original do catálogo desempata: quando há várias ordens válidas,
//! o resultado é sempre o mesmo. Pré-requisitos ausentes do conjunto são
//! ignorados: o nó vira raiz.
//!
//! ## Ciclos
//!
//! Um nó "em visita" encontrado de novo fecha um ciclo. A aresta é
//! descartada e a visita segue; cada nó continua aparecendo exatamente uma
//! vez, mas algum nó do ciclo fica antes de um de seus pré-requisitos.
//! [`CyclePolicy`] decide se isso é aceito ou vira
//! [`EngineError::CyclicPrerequisites`].

use std::borrow::Borrow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::KnowledgeNode;
use crate::error::EngineError;

/// O que fazer quando os pré-requisitos formam um ciclo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Quebra o ciclo no primeiro nó revisitado e segue (comportamento legado).
    #[default]
    Permissive,
    /// Falha com [`EngineError::CyclicPrerequisites`].
    Strict,
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Resultado bruto da visita: índices ordenados + nós que fecharam ciclos.
struct Visit {
    order: Vec<usize>,
    back_edges: Vec<String>,
}

fn visit_all<N: Borrow<KnowledgeNode>>(nodes: &[N]) -> Visit {
    // IDs duplicados resolvem para a primeira ocorrência.
    let mut position: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        position.entry(node.borrow().id.as_str()).or_insert(i);
    }

    let mut marks = vec![Mark::Unvisited; nodes.len()];
    let mut order = Vec::with_capacity(nodes.len());
    let mut back_edges = Vec::new();
    // (índice do nó, próximo pré-requisito a examinar)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..nodes.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (current, cursor) = *frame;
            let prerequisites = &nodes[current].borrow().prerequisites;

            if cursor == prerequisites.len() {
                marks[current] = Mark::Done;
                order.push(current);
                stack.pop();
                continue;
            }

            frame.1 += 1;
            let Some(&next) = position.get(prerequisites[cursor].as_str()) else {
                continue;
            };
            match marks[next] {
                Mark::Unvisited => {
                    marks[next] = Mark::InProgress;
                    stack.push((next, 0));
                }
                Mark::InProgress => {
                    back_edges.push(nodes[next].borrow().id.clone());
                }
                Mark::Done => {}
            }
        }
    }

    Visit { order, back_edges }
}

/// Índices de `nodes` em ordem de estudo, segundo `policy`.
pub fn order_indices<N: Borrow<KnowledgeNode>>(
    nodes: &[N],
    policy: CyclePolicy,
) -> Result<Vec<usize>, EngineError> {
    let visit = visit_all(nodes);
    if let Some(node_id) = visit.back_edges.first() {
        match policy {
            CyclePolicy::Strict => {
                return Err(EngineError::CyclicPrerequisites {
                    node_id: node_id.clone(),
                })
            }
            CyclePolicy::Permissive => {
                tracing::debug!(cycles = ?visit.back_edges, "Ordenação: ciclo de pré-requisitos quebrado");
            }
        }
    }
    Ok(visit.order)
}

/// Ordena os nós; ciclos são quebrados silenciosamente.
///
/// Devolve todos os nós de entrada exatamente uma vez.
pub fn order<N: Borrow<KnowledgeNode>>(nodes: &[N]) -> Vec<&KnowledgeNode> {
    visit_all(nodes)
        .order
        .into_iter()
        .map(|i| nodes[i].borrow())
        .collect()
}

/// Ordena os nós aplicando `policy` a ciclos.
pub fn order_with<N: Borrow<KnowledgeNode>>(
    nodes: &[N],
    policy: CyclePolicy,
) -> Result<Vec<&KnowledgeNode>, EngineError> {
    Ok(order_indices(nodes, policy)?
        .into_iter()
        .map(|i| nodes[i].borrow())
        .collect())
}
