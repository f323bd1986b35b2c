//! Catálogo de demonstração embutido.
//!
//! Cinco nós em quatro disciplinas. `next_nodes` cita nós que ainda não
//! existem no catálogo (cs3, cs4, math2...): é só informativo.

use crate::core::{KnowledgeNode, Resource, ResourceType};

const CS: &str = "Computer Science";
const MATH: &str = "Mathematics";
const PHYSICS: &str = "Physics";
const CHEMISTRY: &str = "Chemistry";

/// Monta um recurso a partir das colunas da tabela de seed.
#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    title: &str,
    kind: ResourceType,
    subject: &str,
    difficulty: u8,
    duration: u32,
    author: &str,
    tags: &[&str],
    [visual, auditory, reading, kinesthetic]: [u8; 4],
) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        subject: subject.to_string(),
        difficulty,
        duration,
        visual_score: visual,
        auditory_score: auditory,
        reading_score: reading,
        kinesthetic_score: kinesthetic,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author: Some(author.to_string()),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn nodes() -> Vec<KnowledgeNode> {
    vec![
        KnowledgeNode {
            id: "cs1".into(),
            title: "Introduction to Computer Science".into(),
            subject: CS.into(),
            prerequisites: Vec::new(),
            next_nodes: strings(&["cs2", "cs3"]),
            difficulty: 1,
            estimated_duration: 120,
            resources: vec![
                resource(
                    "cs1_r1",
                    "Computer Science Crash Course",
                    ResourceType::Video,
                    CS,
                    1,
                    45,
                    "School of Computer Science",
                    &["fundamentals", "beginner", "video"],
                    [95, 85, 60, 40],
                ),
                resource(
                    "cs1_r2",
                    "Stories from Computing History",
                    ResourceType::Article,
                    CS,
                    1,
                    30,
                    "Institute of Technology and Culture",
                    &["history", "popular science", "article"],
                    [50, 40, 90, 30],
                ),
            ],
        },
        KnowledgeNode {
            id: "cs2".into(),
            title: "Python Programming Basics".into(),
            subject: CS.into(),
            prerequisites: strings(&["cs1"]),
            next_nodes: strings(&["cs4"]),
            difficulty: 2,
            estimated_duration: 240,
            resources: vec![
                resource(
                    "cs2_r1",
                    "Interactive Python Tutorial",
                    ResourceType::Interactive,
                    CS,
                    2,
                    60,
                    "Python Education Alliance",
                    &["python", "practice", "interactive"],
                    [70, 50, 80, 90],
                ),
                resource(
                    "cs2_r2",
                    "Game Development with Python",
                    ResourceType::Project,
                    CS,
                    2,
                    120,
                    "Game Dev Studio",
                    &["python", "game development", "project"],
                    [75, 40, 60, 95],
                ),
            ],
        },
        KnowledgeNode {
            id: "math1".into(),
            title: "Foundations of Higher Mathematics".into(),
            subject: MATH.into(),
            prerequisites: Vec::new(),
            next_nodes: strings(&["math2"]),
            difficulty: 3,
            estimated_duration: 180,
            resources: vec![resource(
                "math1_r1",
                "Visual Calculus",
                ResourceType::Interactive,
                MATH,
                3,
                45,
                "Mathematics Education Institute",
                &["calculus", "visual learning", "modeling"],
                [95, 60, 50, 40],
            )],
        },
        KnowledgeNode {
            id: "phys1".into(),
            title: "Introduction to Classical Mechanics".into(),
            subject: PHYSICS.into(),
            prerequisites: Vec::new(),
            next_nodes: strings(&["phys2"]),
            difficulty: 2,
            estimated_duration: 150,
            resources: vec![resource(
                "phys1_r1",
                "Physics Lab Simulations",
                ResourceType::Interactive,
                PHYSICS,
                2,
                45,
                "Physics Education Lab",
                &["mechanics", "experiments", "simulation"],
                [90, 50, 60, 95],
            )],
        },
        KnowledgeNode {
            id: "chem1".into(),
            title: "Basic Chemistry Concepts".into(),
            subject: CHEMISTRY.into(),
            prerequisites: Vec::new(),
            next_nodes: strings(&["chem2"]),
            difficulty: 2,
            estimated_duration: 160,
            resources: vec![
                resource(
                    "chem1_r1",
                    "Molecules in 3D",
                    ResourceType::Video,
                    CHEMISTRY,
                    2,
                    40,
                    "Chemistry Education Institute",
                    &["molecular structure", "3d visualization"],
                    [95, 60, 50, 70],
                ),
                resource(
                    "chem1_r2",
                    "Virtual Chemistry Lab",
                    ResourceType::Exercise,
                    CHEMISTRY,
                    2,
                    60,
                    "Virtual Labs",
                    &["lab work", "practice"],
                    [80, 50, 60, 90],
                ),
            ],
        },
    ]
}
