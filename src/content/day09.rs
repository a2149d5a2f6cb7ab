//! 第9天：介词与短语搭配 题库

use crate::models::{ChoiceItem, CuedItem, ExerciseItem, MatchPair};

const fn ex(prompt: &'static str, answer: &'static str, rationale: &'static str) -> ExerciseItem {
    ExerciseItem::explained(prompt, answer, rationale)
}

/// 用 in / on / at 填空
pub static IN_ON_AT: &[ExerciseItem] = &[
    ex("I get up _______ six o'clock.", "at", "具体时刻用 at"),
    ex("We have no classes _______ Sunday.", "on", "星期用 on"),
    ex("My birthday is _______ May.", "in", "月份用 in"),
    ex("He was born _______ 2014.", "in", "年份用 in"),
    ex("They often go for a walk _______ the evening.", "in", "in the evening"),
    ex("The children get presents _______ Christmas Day.", "on", "具体某一天用 on"),
    ex("Let's meet _______ noon.", "at", "at noon"),
    ex("There is a picture _______ the wall.", "on", "表面上用 on"),
    ex("The bird is _______ the tree.", "in", "外来物在树上用 in"),
    ex("My mother works _______ a hospital.", "in", "在……里面工作"),
    ex("I saw him _______ the bus stop.", "at", "较小地点用 at"),
    ex("We plant trees _______ spring.", "in", "季节用 in"),
    ex("The party starts _______ the morning of May 1st.", "on", "具体某天的上午用 on"),
    ex("Don't read _______ the sun.", "in", "in the sun 在阳光下"),
    ex("Look! A cat is sleeping _______ the sofa.", "on", "在沙发上用 on"),
];

/// 英汉配对：短语 + 中文意思
pub static MATCHING: &[MatchPair] = &[
    MatchPair::new("in front of", "在……前面"),
    MatchPair::new("behind", "在……后面"),
    MatchPair::new("next to", "紧挨着"),
    MatchPair::new("between ... and ...", "在……和……之间"),
    MatchPair::new("under", "在……下面"),
    MatchPair::new("near", "在……附近"),
    MatchPair::new("across from", "在……对面"),
    MatchPair::new("on the left", "在左边"),
    MatchPair::new("in the middle of", "在……中间"),
    MatchPair::new("far from", "离……远"),
];

/// 单项选择
#[rustfmt::skip]
pub static CHOICES: &[ChoiceItem] = &[
    ChoiceItem::new("The school is _______ the park and the hospital.", ["between", "next", "near to"], 0, "between ... and ..."),
    ChoiceItem::new("I usually go to school _______ foot.", ["by", "on", "in"], 1, "on foot 步行"),
    ChoiceItem::new("She goes to work _______ bus.", ["by", "on", "at"], 0, "by bus 乘公共汽车"),
    ChoiceItem::new("The cinema is _______ the bookstore. Just turn left.", ["next to", "far", "between"], 0, "next to 紧挨着"),
    ChoiceItem::new("We will have a party _______ the afternoon of June 1st.", ["in", "on", "at"], 1, "具体某天的下午用 on"),
    ChoiceItem::new("There is a ball _______ the desk.", ["under", "between", "across"], 0, "under 在……下面"),
    ChoiceItem::new("My home is _______ the school, so I can walk there.", ["near", "far from", "across"], 0, "near 在……附近"),
    ChoiceItem::new("Thank you _______ your help.", ["to", "for", "with"], 1, "thank ... for ..."),
    ChoiceItem::new("Please write it _______ English.", ["on", "in", "with"], 1, "in English 用英语"),
    ChoiceItem::new("He is good _______ maths.", ["at", "in", "for"], 0, "be good at 擅长"),
];

/// 根据中文完成句子
#[rustfmt::skip]
pub static COMPLETE: &[CuedItem] = &[
    CuedItem::new("邮局在电影院的旁边。", "The post office is _______ _______ the cinema.", "next to"),
    CuedItem::new("书店在医院的对面。", "The bookstore is _______ _______ the hospital.", "across from"),
    CuedItem::new("我家离学校很远。", "My home is _______ _______ the school.", "far from"),
    CuedItem::new("猫在门后面。", "The cat is _______ the door.", "behind"),
    CuedItem::new("公园在超市前面。", "The park is _______ _______ _______ the supermarket.", "in front of"),
    CuedItem::new("我每天步行上学。", "I go to school _______ _______ every day.", "on foot"),
    CuedItem::new("他擅长游泳。", "He is good _______ swimming.", "at"),
    CuedItem::new("向左转，然后直走。", "Turn _______, then go _______.", "left, straight"),
    CuedItem::new("她坐地铁去上班。", "She goes to work _______ _______.", "by subway"),
    CuedItem::new("博物馆在图书馆和银行之间。", "The museum is _______ the library _______ the bank.", "between, and"),
];
