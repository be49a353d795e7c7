//! Seed corpus: the fixed mental-health knowledge documents loaded once
//! at process start. The corpus is static; there is no create, update, or
//! delete path at runtime.

use mindmate_core::types::KnowledgeDocument;

fn document(id: i64, title: &str, content: &str, category: &str, tags: &[&str]) -> KnowledgeDocument {
    KnowledgeDocument {
        id,
        title: title.into(),
        content: content.into(),
        category: category.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Build the seed corpus with sequential ids starting at 1.
pub fn seed_corpus() -> Vec<KnowledgeDocument> {
    vec![
        document(
            1,
            "Understanding Anxiety",
            "Anxiety is a normal human emotion that everyone experiences from time to time. It becomes problematic when it interferes with daily functioning. Common symptoms include excessive worry, restlessness, fatigue, difficulty concentrating, irritability, muscle tension, and sleep disturbances.",
            "anxiety",
            &["anxiety", "symptoms", "mental health"],
        ),
        document(
            2,
            "Coping with Stress",
            "Stress management techniques include deep breathing exercises, regular physical activity, maintaining a healthy diet, getting adequate sleep, practicing mindfulness, setting boundaries, and seeking social support when needed.",
            "stress",
            &["stress", "coping", "techniques"],
        ),
        document(
            3,
            "Signs of Burnout",
            "Burnout symptoms include emotional exhaustion, cynicism, reduced sense of personal accomplishment, physical symptoms like headaches and insomnia, decreased motivation, and feelings of helplessness.",
            "burnout",
            &["burnout", "work stress", "exhaustion"],
        ),
        document(
            4,
            "Building Resilience",
            "Resilience can be developed through building strong relationships, accepting change as part of life, setting realistic goals, taking decisive action, looking for opportunities for self-discovery, nurturing a positive self-view, and keeping things in perspective.",
            "resilience",
            &["resilience", "coping", "growth"],
        ),
        document(
            5,
            "Understanding Anxiety Disorders",
            "Anxiety disorders are among the most common mental health conditions. They involve excessive fear or anxiety that interferes with daily activities. Types include generalized anxiety disorder, panic disorder, social anxiety disorder, and specific phobias. Symptoms can be physical (rapid heartbeat, sweating, trembling) and psychological (excessive worry, restlessness, difficulty concentrating).",
            "anxiety",
            &["anxiety", "disorders", "symptoms", "types"],
        ),
        document(
            6,
            "Recognizing Depression Symptoms",
            "Depression involves persistent sadness and loss of interest in activities once enjoyed. Symptoms include changes in appetite and sleep, fatigue, difficulty concentrating, feelings of worthlessness or guilt, and thoughts of death or suicide. It's important to seek professional help if these symptoms persist for more than two weeks.",
            "depression",
            &["depression", "symptoms", "mood", "sadness"],
        ),
        document(
            7,
            "Stress Management Techniques",
            "Effective stress management includes identifying stressors, practicing relaxation techniques like deep breathing and progressive muscle relaxation, maintaining a healthy lifestyle with regular exercise and adequate sleep, setting realistic goals, and building a strong support network.",
            "stress",
            &["stress", "management", "relaxation", "coping"],
        ),
        document(
            8,
            "Sleep Hygiene for Mental Health",
            "Good sleep hygiene is crucial for mental health. Establish a regular sleep schedule, create a comfortable sleep environment, limit screen time before bed, avoid caffeine and large meals close to bedtime, and develop a relaxing bedtime routine. Poor sleep can worsen anxiety and depression symptoms.",
            "sleep",
            &["sleep", "hygiene", "insomnia", "mental health"],
        ),
        document(
            9,
            "Mindfulness and Meditation",
            "Mindfulness involves paying attention to the present moment without judgment. Regular mindfulness practice can reduce anxiety, depression, and stress. Simple techniques include focused breathing, body scans, mindful walking, and loving-kindness meditation. Start with just 5-10 minutes daily.",
            "mindfulness",
            &["mindfulness", "meditation", "present moment", "awareness"],
        ),
        document(
            10,
            "Building Emotional Resilience",
            "Emotional resilience is the ability to adapt to stressful situations and bounce back from adversity. Build resilience by maintaining strong relationships, accepting change, setting realistic goals, taking decisive action, learning from experiences, and maintaining perspective during difficult times.",
            "resilience",
            &["resilience", "coping", "adversity", "emotional strength"],
        ),
        document(
            11,
            "Workplace Burnout Prevention",
            "Burnout is characterized by emotional exhaustion, cynicism, and reduced sense of accomplishment. Prevent burnout by setting boundaries, taking regular breaks, prioritizing self-care, communicating with supervisors about workload, and developing interests outside of work.",
            "burnout",
            &["burnout", "workplace", "exhaustion", "prevention"],
        ),
        document(
            12,
            "Cognitive Behavioral Techniques",
            "CBT techniques help identify and change negative thought patterns. Common techniques include thought challenging (questioning negative thoughts), behavioral activation (engaging in meaningful activities), and problem-solving skills. These can be practiced independently or with a therapist.",
            "cbt",
            &["cognitive", "behavioral", "thoughts", "techniques"],
        ),
        document(
            13,
            "Social Support and Mental Health",
            "Strong social connections are vital for mental health. They provide emotional support, reduce stress, and increase sense of belonging. Build social support by maintaining existing relationships, joining groups or clubs, volunteering, and being open to new connections.",
            "social",
            &["social support", "relationships", "connection", "community"],
        ),
        document(
            14,
            "When to Seek Professional Help",
            "Seek professional help if symptoms persist for more than two weeks, interfere with daily functioning, involve thoughts of self-harm, or if you feel overwhelmed and unable to cope. Mental health professionals include therapists, counselors, psychologists, and psychiatrists.",
            "help",
            &["professional help", "therapy", "counseling", "treatment"],
        ),
    ]
}
