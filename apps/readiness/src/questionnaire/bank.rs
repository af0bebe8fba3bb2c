use serde::Serialize;

pub const OPTIONS_PER_QUESTION: usize = 4;

/// A multiple-choice behavioral question with one best answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; OPTIONS_PER_QUESTION],
    pub best_answer: usize,
}

pub static QUESTION_BANK: [Question; 5] = [
    Question {
        prompt: "How do you handle disagreements with team members on technical decisions?",
        options: [
            "I always stick to my approach as I trust my technical judgment",
            "I immediately escalate to the manager to resolve the conflict",
            "I discuss different viewpoints, share data/examples, and work towards consensus",
            "I give in to avoid conflict and maintain team harmony",
        ],
        best_answer: 2,
    },
    Question {
        prompt: "When faced with multiple urgent tasks, how do you prioritize your work?",
        options: [
            "I work on whatever seems most interesting first",
            "I assess impact, deadlines, and dependencies to create a structured plan",
            "I try to do everything at once to get it all done",
            "I wait for my manager to tell me what to do first",
        ],
        best_answer: 1,
    },
    Question {
        prompt: "How do you handle receiving constructive criticism?",
        options: [
            "I take it personally and feel demotivated",
            "I defend my actions and explain why the criticism is wrong",
            "I listen actively, ask questions for clarity, and use it to improve",
            "I ignore it and continue working as before",
        ],
        best_answer: 2,
    },
    Question {
        prompt: "What's your approach to learning new technologies or skills?",
        options: [
            "I wait for formal training from my organization",
            "I learn only when absolutely required for a task",
            "I proactively learn through various resources and create practice projects",
            "I focus only on what I already know well",
        ],
        best_answer: 2,
    },
    Question {
        prompt: "How do you ensure effective communication in a remote/hybrid work environment?",
        options: [
            "I minimize communication to avoid disturbing others",
            "I use appropriate channels, maintain documentation, and follow up regularly",
            "I send lengthy emails explaining every detail",
            "I prefer to work independently without much communication",
        ],
        best_answer: 1,
    },
];

pub fn question_bank() -> &'static [Question] {
    &QUESTION_BANK
}

/// Best-answer indices in bank order.
pub fn answer_key() -> Vec<usize> {
    QUESTION_BANK.iter().map(|q| q.best_answer).collect()
}
