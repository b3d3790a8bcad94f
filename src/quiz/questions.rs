#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Nominal answer. Scoring ignores it, every answer earns the discount.
    #[allow(dead_code)]
    pub correct: usize,
    #[allow(dead_code)]
    pub explanation: &'static str,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        prompt: "How do you feel about Temu exiting the U.S. market?",
        options: &[
            "It was expected — the prices were very aggressive",
            "Surprised — I actually liked shopping there",
            "It doesn't affect me — I rarely use the site",
            "It makes room for better and more reliable brands",
        ],
        correct: 0,
        explanation: "Many analysts predicted this outcome due to unsustainable pricing models.",
    },
    Question {
        id: 2,
        prompt: "Have you ever bought anything from Temu?",
        options: &[
            "Yes, many times",
            "Just once or twice",
            "I've visited, but never purchased",
            "No, never tried it",
        ],
        correct: 0,
        explanation: "Many customers had multiple experiences with the platform before its exit.",
    },
    Question {
        id: 3,
        prompt: "What do you think happens to high-quality products from undelivered Temu orders?",
        options: &[
            "They get destroyed or forgotten",
            "Some are resold at deep discounts",
            "They're stored until reprocessed",
            "I'd buy them if the quality is guaranteed",
        ],
        correct: 0,
        explanation: "Unfortunately, many quality products from failed deliveries often go to waste.",
    },
    Question {
        id: 4,
        prompt: "If trusted stock from Temu is being liquidated with up to $100 OFF, would you try it?",
        options: &[
            "Yes, that's a smart opportunity",
            "Only if it's sealed and original",
            "Maybe — depends on the fragrances",
            "I'm always open to trying something new",
        ],
        correct: 0,
        explanation: "Smart shoppers recognize genuine liquidation opportunities when they see them.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_is_well_formed() {
        assert!(!QUESTIONS.is_empty());
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
            assert!(q.options.len() >= 2);
            assert!(q.correct < q.options.len());
        }
    }
}
