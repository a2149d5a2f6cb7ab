//! 第6天：一般过去时 题库

use crate::models::{ChoiceItem, CuedItem, ExerciseItem};

const fn ex(prompt: &'static str, answer: &'static str, rationale: &'static str) -> ExerciseItem {
    ExerciseItem::explained(prompt, answer, rationale)
}

/// 动词过去式
pub static PAST_FORMS: &[ExerciseItem] = &[
    ex("play", "played", "规则变化，直接加 ed"),
    ex("live", "lived", "规则变化，以 e 结尾加 d"),
    ex("study", "studied", "规则变化，辅音字母 + y 变 y 为 i 加 ed"),
    ex("stop", "stopped", "规则变化，双写 p 加 ed"),
    ex("go", "went", "不规则变化"),
    ex("is", "was", "不规则变化"),
    ex("are", "were", "不规则变化"),
    ex("have", "had", "不规则变化"),
    ex("see", "saw", "不规则变化"),
    ex("eat", "ate", "不规则变化"),
    ex("buy", "bought", "不规则变化"),
    ex("do", "did", "不规则变化"),
    ex("read", "read", "不规则变化，拼写不变、读音改变"),
    ex("take", "took", "不规则变化"),
    ex("visit", "visited", "规则变化，直接加 ed"),
];

/// 用所给动词的适当形式填空
pub static VERB_FILL: &[ExerciseItem] = &[
    ex("I _______ (visit) my grandparents last weekend.", "visited", "last weekend 用一般过去时"),
    ex("She _______ (be) ill yesterday.", "was", "主语单数 be 用 was"),
    ex("They _______ (go) to the zoo two days ago.", "went", "ago 用一般过去时"),
    ex("_______ you _______ (watch) TV last night?", "Did, watch", "疑问句用 Did + 原形"),
    ex("He _______ (not finish) his homework yesterday.", "didn't finish", "否定用 didn't + 原形"),
    ex("We _______ (be) at school last Friday.", "were", "主语复数 be 用 were"),
    ex("Mike _______ (buy) a new book yesterday afternoon.", "bought", "buy 的过去式为 bought"),
    ex("What _______ you _______ (do) last Sunday?", "did, do", "特殊疑问句用 did + 原形"),
    ex("My father _______ (read) a newspaper this morning.", "read", "read 过去式拼写不变"),
    ex("The girl _______ (study) very hard last term.", "studied", "变 y 为 i 加 ed"),
    ex("It _______ (rain) heavily last night.", "rained", "last night 用一般过去时"),
    ex("Amy _______ (see) a film with her friends yesterday.", "saw", "see 的过去式为 saw"),
];

/// 单项选择
#[rustfmt::skip]
pub static CHOICES: &[ChoiceItem] = &[
    ChoiceItem::new("I _______ a good time yesterday.", ["have", "had", "has"], 1, "yesterday 用过去式"),
    ChoiceItem::new("_______ she go shopping last Saturday?", ["Does", "Did", "Is"], 1, "一般过去时疑问句用 Did"),
    ChoiceItem::new("They _______ in Beijing in 2020.", ["was", "were", "are"], 1, "主语复数用 were"),
    ChoiceItem::new("He didn't _______ football yesterday.", ["play", "played", "plays"], 0, "didn't 后接原形"),
    ChoiceItem::new("— Did you go to the park? — _______.", ["Yes, I did", "Yes, I do", "No, I don't"], 0, "用 did 问，用 did 答"),
    ChoiceItem::new("We _______ a big dinner last night.", ["eat", "ate", "eats"], 1, "eat 的过去式为 ate"),
    ChoiceItem::new("Where _______ you last weekend?", ["are", "was", "were"], 2, "主语 you 用 were"),
    ChoiceItem::new("My mother _______ me a dress yesterday.", ["buys", "bought", "buy"], 1, "buy 的过去式为 bought"),
    ChoiceItem::new("Tom _______ his homework an hour ago.", ["finished", "finishes", "finish"], 0, "ago 用一般过去时"),
    ChoiceItem::new("There _______ a lot of people in the park last Sunday.", ["is", "was", "were"], 2, "people 为复数，用 were"),
];

/// 按要求改写句子：改写要求 + 原句 + 答案
#[rustfmt::skip]
pub static TRANSFORM: &[CuedItem] = &[
    CuedItem::new("改为一般疑问句", "He went to school by bike yesterday.", "Did he go to school by bike yesterday?"),
    CuedItem::new("改为否定句", "She watched TV last night.", "She didn't watch TV last night."),
    CuedItem::new("用 yesterday 改写", "I play football every day.", "I played football yesterday."),
    CuedItem::new("改为一般疑问句", "They were at home last Sunday.", "Were they at home last Sunday?"),
    CuedItem::new("改为否定句", "Tom had a party last week.", "Tom didn't have a party last week."),
    CuedItem::new("对划线部分提问（划线：last Monday）", "We visited the museum last Monday.", "When did you visit the museum?"),
    CuedItem::new("改为否定句", "I was late for school yesterday.", "I wasn't late for school yesterday."),
    CuedItem::new("改为一般疑问句", "Amy bought some apples.", "Did Amy buy any apples?"),
    CuedItem::new("用 yesterday morning 改写", "My father reads a newspaper every morning.", "My father read a newspaper yesterday morning."),
    CuedItem::new("对划线部分提问（划线：went fishing）", "They went fishing last weekend.", "What did they do last weekend?"),
];
