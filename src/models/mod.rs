pub mod answer_key;
pub mod exercise;
pub mod tier;

pub use answer_key::{format_answer, AnswerKey};
pub use exercise::{
    ChoiceItem, CuedItem, DialogueItem, ExerciseItem, MatchPair, Passage, PhraseGroup,
};
pub use tier::Tier;
