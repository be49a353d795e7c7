//! Seeded exercise catalogue: three guided self-help exercises available
//! from first request.

use mindmate_core::types::Exercise;
use serde_json::json;

pub fn seed_exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: 1,
            title: "4-7-8 Breathing".into(),
            description: "A calming breathing technique to reduce anxiety".into(),
            kind: "breathing".into(),
            duration_minutes: 5,
            instructions: json!({
                "steps": [
                    "Sit comfortably and close your eyes",
                    "Inhale through your nose for 4 counts",
                    "Hold your breath for 7 counts",
                    "Exhale through your mouth for 8 counts",
                    "Repeat 4-6 times"
                ]
            }),
            icon: "fas fa-lungs".into(),
        },
        Exercise {
            id: 2,
            title: "Mindful Journaling".into(),
            description: "Express your thoughts and feelings through writing".into(),
            kind: "journaling".into(),
            duration_minutes: 10,
            instructions: json!({
                "prompts": [
                    "What's one thing you're grateful for today?",
                    "What's one challenge you're facing?",
                    "What's one small step you can take?",
                    "How are you feeling right now?"
                ]
            }),
            icon: "fas fa-pen".into(),
        },
        Exercise {
            id: 3,
            title: "5-4-3-2-1 Grounding".into(),
            description: "Ground yourself in the present moment".into(),
            kind: "grounding".into(),
            duration_minutes: 3,
            instructions: json!({
                "steps": [
                    "Name 5 things you can see",
                    "Name 4 things you can touch",
                    "Name 3 things you can hear",
                    "Name 2 things you can smell",
                    "Name 1 thing you can taste"
                ]
            }),
            icon: "fas fa-leaf".into(),
        },
    ]
}
