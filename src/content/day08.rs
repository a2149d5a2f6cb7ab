//! 第8天：名词与代词 题库

use crate::models::{ChoiceItem, ExerciseItem};

const fn ex(prompt: &'static str, answer: &'static str, rationale: &'static str) -> ExerciseItem {
    ExerciseItem::explained(prompt, answer, rationale)
}

/// 名词复数形式
pub static PLURALS: &[ExerciseItem] = &[
    ex("book", "books", "一般情况加 s"),
    ex("box", "boxes", "以 x 结尾加 es"),
    ex("bus", "buses", "以 s 结尾加 es"),
    ex("watch", "watches", "以 ch 结尾加 es"),
    ex("baby", "babies", "辅音字母 + y 结尾，变 y 为 i 加 es"),
    ex("boy", "boys", "元音字母 + y 结尾直接加 s"),
    ex("leaf", "leaves", "以 f 结尾，变 f 为 v 加 es"),
    ex("knife", "knives", "以 fe 结尾，变 fe 为 v 加 es"),
    ex("tomato", "tomatoes", "有生命的 o 结尾名词加 es"),
    ex("photo", "photos", "无生命的 o 结尾名词加 s"),
    ex("man", "men", "不规则变化"),
    ex("child", "children", "不规则变化"),
    ex("foot", "feet", "不规则变化"),
    ex("mouse", "mice", "不规则变化"),
    ex("sheep", "sheep", "单复数同形"),
];

/// 用括号内代词的适当形式填空
pub static PRONOUN_FILL: &[ExerciseItem] = &[
    ex("This is _______ (I) book.", "my", "名词前用形容词性物主代词"),
    ex("Please help _______ (we).", "us", "动词后用宾格"),
    ex("_______ (she) is my sister.", "She", "作主语用主格"),
    ex("The red bag is _______ (he).", "his", "名词性物主代词 his"),
    ex("Is this pen _______ (you)?", "yours", "名词性物主代词 yours"),
    ex("Let _______ (they) go first.", "them", "let 后用宾格"),
    ex("_______ (we) classroom is very big.", "Our", "名词前用形容词性物主代词"),
    ex("I can see _______ (she) in the park.", "her", "动词后用宾格"),
    ex("That is not my ruler. _______ (I) is blue.", "Mine", "名词性物主代词 mine"),
    ex("The dog is wagging _______ (it) tail.", "its", "形容词性物主代词 its"),
    ex("Tom and _______ (I) are good friends.", "I", "作主语用主格"),
    ex("These shoes are _______ (they).", "theirs", "名词性物主代词 theirs"),
];

/// 单项选择
#[rustfmt::skip]
pub static CHOICES: &[ChoiceItem] = &[
    ChoiceItem::new("There are three _______ on the farm.", ["sheep", "sheeps", "sheepes"], 0, "sheep 单复数同形"),
    ChoiceItem::new("I have two _______.", ["child", "childs", "children"], 2, "child 的复数为 children"),
    ChoiceItem::new("_______ name is Lucy.", ["She", "Her", "Hers"], 1, "名词前用形容词性物主代词"),
    ChoiceItem::new("Can you help _______ with my English?", ["I", "my", "me"], 2, "help 后用宾格"),
    ChoiceItem::new("This is Amy's bag. The black one is _______.", ["my", "mine", "me"], 1, "代替 my bag 用 mine"),
    ChoiceItem::new("We need some _______ for the salad.", ["tomato", "tomatos", "tomatoes"], 2, "tomato 的复数加 es"),
    ChoiceItem::new("Look at the _______. They are playing games.", ["man", "men", "mans"], 1, "man 的复数为 men"),
    ChoiceItem::new("— Whose book is this? — It's _______.", ["his", "him", "he"], 0, "名词性物主代词 his"),
    ChoiceItem::new("There are many _______ on the tree.", ["leafs", "leaves", "leaf"], 1, "f 变 v 加 es"),
    ChoiceItem::new("My brother and I _______ in Grade Six.", ["is", "am", "are"], 2, "并列主语用 are"),
];

/// 改错：原句 + 正确句子 + 解析
#[rustfmt::skip]
pub static CORRECTIONS: &[ExerciseItem] = &[
    ex("I have three boxs.", "I have three boxes.", "boxs → boxes"),
    ex("This is him book.", "This is his book.", "him → his"),
    ex("There are two mans in the room.", "There are two men in the room.", "mans → men"),
    ex("Please give I a pencil.", "Please give me a pencil.", "I → me"),
    ex("These are my foots.", "These are my feet.", "foots → feet"),
    ex("The bag is her.", "The bag is hers.", "her → hers"),
    ex("There are five babys in the picture.", "There are five babies in the picture.", "babys → babies"),
    ex("Them are my friends.", "They are my friends.", "Them → They"),
];
