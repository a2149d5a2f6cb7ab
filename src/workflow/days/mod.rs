//! 九天的练习题生成器

mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;

pub use day02::VocabularyDay;
pub use day03::SentencePatternDay;
pub use day04::SimplePresentDay;
pub use day05::PresentProgressiveDay;
pub use day06::SimplePastDay;
pub use day07::SimpleFutureDay;
pub use day08::NounPronounDay;
pub use day09::PrepositionDay;
pub use day10::ReadingDay;

use crate::workflow::day_generator::DayGenerator;

/// 全部生成器，按天数升序
pub fn all_generators() -> Vec<Box<dyn DayGenerator>> {
    vec![
        Box::new(VocabularyDay),
        Box::new(SentencePatternDay),
        Box::new(SimplePresentDay),
        Box::new(PresentProgressiveDay),
        Box::new(SimplePastDay),
        Box::new(SimpleFutureDay),
        Box::new(NounPronounDay),
        Box::new(PrepositionDay),
        Box::new(ReadingDay),
    ]
}

/// 按天数查找生成器
pub fn generator_for(day: u8) -> Option<Box<dyn DayGenerator>> {
    all_generators().into_iter().find(|g| g.day() == day)
}
