// Prompt constants for the three demos.

/// Default question for the 10-K decoder.
pub const FILINGS_DEFAULT_QUESTION: &str = "Summarize the key themes in these 10K filings";

/// Appended to every 10-K question to fence it off from the filing text.
pub const FILINGS_QUESTION_SUFFIX: &str = "##################\n\n";

/// Default question for the contract companion.
pub const CONTRACT_DEFAULT_QUESTION: &str = "Summarize the key themes in this contract";

pub const CONTRACT_SYSTEM: &str = "You are a helpful AI contract assistant. \
    Answer the question in a helpful and concise way, \
    if you don't know the answer respond with \"I don't know\"";

/// Pre-canned questions offered by the plan comparison demo.
pub const PLAN_QUESTIONS: &[&str] = &[
    "I need an in-patient procedure, help me choose which plan is best for me?",
    "Which healthcare plan should I choose between these 2?",
    "How much would I pay out of pocket to see my PCP every year?",
    "I have a large family with 4 dependents. Which plan is right for me?",
    "How much prescription coverage is paid for by each of these plans?",
    "I am over 18 years old and the only person who would be covered by my insurance. \
     Is vision covered by these insurance plans?",
];
