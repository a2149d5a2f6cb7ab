//! 第3天：句型基础 题库

use crate::models::{CuedItem, ExerciseItem};

const fn ex(prompt: &'static str, answer: &'static str, rationale: &'static str) -> ExerciseItem {
    ExerciseItem::explained(prompt, answer, rationale)
}

/// 句型判断：主系表 / 主谓宾
pub static SENTENCE_JUDGE: &[ExerciseItem] = &[
    ex("I am a student.", "主系表", "am 是 be 动词，a student 是表语"),
    ex("She is happy.", "主系表", "is 是 be 动词，happy 是表语"),
    ex("They are teachers.", "主系表", "are 是 be 动词，teachers 是表语"),
    ex("He likes apples.", "主谓宾", "likes 是实义动词，apples 是宾语"),
    ex("We play football.", "主谓宾", "play 是实义动词，football 是宾语"),
    ex("She reads books every day.", "主谓宾", "reads 是实义动词，books 是宾语"),
    ex("The cat is on the table.", "主系表", "is 是 be 动词，on the table 是表语"),
    ex("I have a dog.", "主谓宾", "have 是实义动词，a dog 是宾语"),
    ex("Tom watches TV at night.", "主谓宾", "watches 是实义动词，TV 是宾语"),
    ex("My mother is a doctor.", "主系表", "is 是 be 动词，a doctor 是表语"),
    ex("The flowers are beautiful.", "主系表", "are 是 be 动词，beautiful 是表语"),
    ex("He does his homework.", "主谓宾", "does 是实义动词，his homework 是宾语"),
    ex("We are in the classroom.", "主系表", "are 是 be 动词，in the classroom 是表语"),
    ex("She eats breakfast at 7.", "主谓宾", "eats 是实义动词，breakfast 是宾语"),
    ex("The book is interesting.", "主系表", "is 是 be 动词，interesting 是表语"),
];

/// 陈述句转一般疑问句
pub static TO_QUESTION: &[ExerciseItem] = &[
    ex("I am a student.", "Are you a student?", "be 动词提前"),
    ex("She is happy.", "Is she happy?", "be 动词提前"),
    ex("They are teachers.", "Are they teachers?", "be 动词提前"),
    ex("He likes apples.", "Does he like apples?", "加 Does，动词变原形"),
    ex("We play football.", "Do you play football?", "加 Do"),
    ex("She reads books.", "Does she read books?", "加 Does，动词变原形"),
    ex("Tom watches TV.", "Does Tom watch TV?", "加 Does，动词变原形"),
    ex("I have a dog.", "Do you have a dog?", "加 Do"),
    ex("He is a doctor.", "Is he a doctor?", "be 动词提前"),
    ex("They like music.", "Do they like music?", "加 Do"),
    ex("She goes to school.", "Does she go to school?", "加 Does，动词变原形"),
    ex("We are happy.", "Are you happy?", "be 动词提前"),
    ex("He does homework.", "Does he do homework?", "加 Does，动词变原形"),
    ex("I am tired.", "Are you tired?", "be 动词提前"),
    ex("She has a cat.", "Does she have a cat?", "加 Does，动词变原形"),
];

/// 陈述句转否定句
pub static TO_NEGATIVE: &[ExerciseItem] = &[
    ex("I am a student.", "I am not a student.", "be 动词后加 not"),
    ex("She is happy.", "She is not happy.", "be 动词后加 not"),
    ex("They are teachers.", "They are not teachers.", "be 动词后加 not"),
    ex("He likes apples.", "He does not like apples.", "加 does not，动词变原形"),
    ex("We play football.", "We do not play football.", "加 do not"),
    ex("She reads books.", "She does not read books.", "加 does not，动词变原形"),
    ex("Tom watches TV.", "Tom does not watch TV.", "加 does not，动词变原形"),
    ex("I have a dog.", "I do not have a dog.", "加 do not"),
    ex("He is a doctor.", "He is not a doctor.", "be 动词后加 not"),
    ex("They like music.", "They do not like music.", "加 do not"),
    ex("She goes to school.", "She does not go to school.", "加 does not，动词变原形"),
    ex("We are happy.", "We are not happy.", "be 动词后加 not"),
    ex("He does homework.", "He does not do homework.", "加 does not，动词变原形"),
    ex("I am tired.", "I am not tired.", "be 动词后加 not"),
    ex("She has a cat.", "She does not have a cat.", "加 does not，动词变原形"),
];

/// be 动词与 do/does 选择填空
pub static BE_DO_FILL: &[ExerciseItem] = &[
    ex("_______ you a student? Yes, I _______.", "Are, am", "主语 you 用 Are"),
    ex("_______ she like apples? Yes, she _______.", "Does, does", "第三人称单数用 Does"),
    ex("He _______ not a teacher.", "is", "be 动词否定"),
    ex("They _______ not play football.", "do", "复数主语用 do"),
    ex("_______ it cold today? Yes, it _______.", "Is, is", "主语 it 用 Is"),
    ex("She _______ not go to school on Sunday.", "does", "第三人称单数用 does"),
    ex("_______ your mother a doctor? Yes, she _______.", "Is, is", "主语 your mother 用 Is"),
    ex("_______ they have a car? No, they _______.", "Do, don't", "复数主语用 Do"),
    ex("I _______ not happy today.", "am", "主语 I 用 am"),
    ex("_______ Tom like music? Yes, he _______.", "Does, does", "第三人称单数用 Does"),
    ex("We _______ students.", "are", "主语 We 用 are"),
    ex("_______ you play basketball? Yes, I _______.", "Do, do", "主语 you 用 Do"),
    ex("The cat _______ on the table.", "is", "主语 The cat 用 is"),
    ex("_______ he do his homework? Yes, he _______.", "Does, does", "第三人称单数用 Does"),
    ex("My parents _______ not at home.", "are", "复数主语用 are"),
];

/// 句型转换：原句 + 改写要求 + 答案
pub static TRANSFORM: &[CuedItem] = &[
    CuedItem::new("一般疑问句", "He is a good boy.", "Is he a good boy?"),
    CuedItem::new("否定句", "She likes reading.", "She does not like reading."),
    CuedItem::new("一般疑问句", "They are in the park.", "Are they in the park?"),
    CuedItem::new("否定句", "I play games every day.", "I do not play games every day."),
    CuedItem::new("一般疑问句", "Tom has a new bike.", "Does Tom have a new bike?"),
    CuedItem::new("否定句", "We are happy.", "We are not happy."),
    CuedItem::new("一般疑问句", "She watches TV at night.", "Does she watch TV at night?"),
    CuedItem::new("否定句", "He is my friend.", "He is not my friend."),
    CuedItem::new("一般疑问句", "They do homework.", "Do they do homework?"),
    CuedItem::new("否定句", "I am a student.", "I am not a student."),
    CuedItem::new("一般疑问句", "She is beautiful.", "Is she beautiful?"),
    CuedItem::new("否定句", "He plays football.", "He does not play football."),
    CuedItem::new("一般疑问句", "We have lunch at 12.", "Do you have lunch at 12?"),
    CuedItem::new("否定句", "The dog is cute.", "The dog is not cute."),
    CuedItem::new("一般疑问句", "They like swimming.", "Do they like swimming?"),
];
