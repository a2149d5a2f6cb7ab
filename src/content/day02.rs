//! 第2天：词汇基础 题库

use crate::models::{CuedItem, ExerciseItem, PhraseGroup};

const fn item(prompt: &'static str, answer: &'static str) -> ExerciseItem {
    ExerciseItem::new(prompt, answer)
}

/// 短语汉译英：中文 → 英文短语
pub static PHRASES_TRANSLATE: &[ExerciseItem] = &[
    item("寻找", "look for"),
    item("看", "look at"),
    item("照顾", "look after"),
    item("起床", "get up"),
    item("上床睡觉", "go to bed"),
    item("醒来", "wake up"),
    item("穿上", "put on"),
    item("脱下", "take off"),
    item("打开（电器）", "turn on"),
    item("关闭（电器）", "turn off"),
    item("在周末", "on the weekend"),
    item("在晚上", "at night"),
    item("在早上", "in the morning"),
    item("在学校", "at school"),
    item("准时", "on time"),
    item("及时", "in time"),
    item("回家", "go home"),
    item("做作业", "do homework"),
    item("吃早餐", "have breakfast"),
    item("上学", "go to school"),
];

/// 选词填空的词库
pub static WORD_BANK: &[&str] = &[
    "look for",
    "look after",
    "get up",
    "put on",
    "turn off",
    "at night",
    "in the morning",
    "look at",
    "wake up",
    "turn on",
    "take off",
    "on time",
    "in time",
    "go to bed",
    "on the weekend",
];

/// 选词填空：句子 + 答案 + 中文释义
#[rustfmt::skip]
pub static FILL_BLANKS: &[ExerciseItem] = &[
    ExerciseItem::explained("I am _______ my keys. Have you seen them?", "looking for", "我正在找我的钥匙。你看到了吗？"),
    ExerciseItem::explained("Please _______ the baby while I cook dinner.", "look after", "我做晚饭时请照顾宝宝。"),
    ExerciseItem::explained("He usually _______ at 7 o'clock every morning.", "gets up", "他通常每天早上7点起床。"),
    ExerciseItem::explained("It's cold outside. Please _______ your coat.", "put on", "外面很冷。请穿上你的外套。"),
    ExerciseItem::explained("Don't forget to _______ the lights before you leave.", "turn off", "离开前别忘了关灯。"),
    ExerciseItem::explained("She does her homework _______ every day.", "at night", "她每天晚上做作业。"),
    ExerciseItem::explained("We have PE class _______.", "in the morning", "我们早上有体育课。"),
    ExerciseItem::explained("Please _______ the blackboard.", "look at", "请看黑板。"),
    ExerciseItem::explained("I _______ at 6:30 and then have breakfast.", "wake up", "我6:30醒来然后吃早餐。"),
    ExerciseItem::explained("Can you _______ the TV? I want to watch the news.", "turn on", "你能打开电视吗？我想看新闻。"),
    ExerciseItem::explained("It's hot. Please _______ your jacket.", "take off", "很热。请脱下你的夹克。"),
    ExerciseItem::explained("We must arrive _______ for the meeting.", "on time", "我们必须准时到达会议。"),
    ExerciseItem::explained("The doctor came _______ to save the patient.", "in time", "医生及时赶到救了病人。"),
    ExerciseItem::explained("I _______ at 9 o'clock every night.", "go to bed", "我每晚9点上床睡觉。"),
    ExerciseItem::explained("What do you usually do _______?", "on the weekend", "你周末通常做什么？"),
];

/// 短语辨析
pub static DISTINGUISH: &[PhraseGroup] = &[
    PhraseGroup {
        label: "look at / look for / look after",
        items: &[
            item("Please _______ the picture on the wall.", "look at"),
            item("I'm _______ my pen. Where is it?", "looking for"),
            item("Can you _______ my dog this weekend?", "look after"),
        ],
    },
    PhraseGroup {
        label: "put on / take off",
        items: &[
            item("It's raining. _______ your raincoat.", "Put on"),
            item("It's warm inside. You can _______ your sweater.", "take off"),
        ],
    },
    PhraseGroup {
        label: "turn on / turn off",
        items: &[
            item("It's dark. Please _______ the light.", "turn on"),
            item("Before you go to bed, _______ the computer.", "turn off"),
        ],
    },
    PhraseGroup {
        label: "on time / in time",
        items: &[
            item("The train arrived _______.", "on time"),
            item("We got to the station just _______ to catch the train.", "in time"),
        ],
    },
    PhraseGroup {
        label: "get up / wake up",
        items: &[item(
            "I _______ at 6:00 but I don't _______ until 6:30.",
            "wake up, get up",
        )],
    },
];

/// 完成句子：中文 + 英文句子 + 答案
#[rustfmt::skip]
pub static COMPLETE: &[CuedItem] = &[
    CuedItem::new("我每天早上六点半起床。", "I _______ _______ at 6:30 every morning.", "get up"),
    CuedItem::new("请照顾好你的妹妹。", "Please _______ _______ your little sister.", "look after"),
    CuedItem::new("他正在找他的书包。", "He is _______ _______ his schoolbag.", "looking for"),
    CuedItem::new("上课前请关掉手机。", "Please _______ _______ your phone before class.", "turn off"),
    CuedItem::new("天冷了，穿上你的毛衣。", "It's cold. _______ _______ your sweater.", "Put on"),
    CuedItem::new("我们周末去公园。", "We go to the park _______ _______ _______.", "on the weekend"),
    CuedItem::new("她每天晚上九点上床睡觉。", "She _______ _______ _______ at 9 p.m. every day.", "goes to bed"),
    CuedItem::new("请看这张地图。", "Please _______ _______ this map.", "look at"),
    CuedItem::new("我早上七点醒来。", "I _______ _______ at 7 a.m.", "wake up"),
    CuedItem::new("进屋后请脱掉你的鞋子。", "Please _______ _______ your shoes after entering the room.", "take off"),
];
