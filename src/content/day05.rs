//! 第5天：现在进行时 题库

use crate::models::{CuedItem, DialogueItem, ExerciseItem};

const fn ex(prompt: &'static str, answer: &'static str, rationale: &'static str) -> ExerciseItem {
    ExerciseItem::explained(prompt, answer, rationale)
}

/// 动词现在分词
pub static PRESENT_PARTICIPLES: &[ExerciseItem] = &[
    ex("read", "reading", "直接加 ing"),
    ex("write", "writing", "去掉不发音的 e 加 ing"),
    ex("swim", "swimming", "重读闭音节，双写末尾辅音字母加 ing"),
    ex("run", "running", "双写 n 加 ing"),
    ex("dance", "dancing", "去 e 加 ing"),
    ex("sing", "singing", "直接加 ing"),
    ex("sit", "sitting", "双写 t 加 ing"),
    ex("make", "making", "去 e 加 ing"),
    ex("play", "playing", "直接加 ing"),
    ex("lie", "lying", "ie 结尾变 y 加 ing"),
    ex("shop", "shopping", "双写 p 加 ing"),
    ex("take", "taking", "去 e 加 ing"),
];

/// 用现在进行时填空
pub static PROGRESSIVE_FILL: &[ExerciseItem] = &[
    ex("Look! The children _______ (play) in the park.", "are playing", "Look! 提示动作正在发生"),
    ex("I _______ (read) a book now.", "am reading", "now 表示现在"),
    ex("Listen! Who _______ (sing)?", "is singing", "Listen! 提示正在进行"),
    ex("My mother _______ (cook) in the kitchen.", "is cooking", "主语单数用 is"),
    ex("_______ they _______ (swim) now?", "Are, swimming", "疑问句 be 动词提前"),
    ex("He _______ (not watch) TV. He is sleeping.", "isn't watching", "否定在 be 后加 not"),
    ex("We _______ (have) an English class now.", "are having", "have 去 e 加 ing"),
    ex("The cat _______ (lie) on the sofa.", "is lying", "lie 变 ie 为 y 加 ing"),
    ex("What _______ you _______ (do)?", "are, doing", "特殊疑问句"),
    ex("It's 8 o'clock. Tom _______ (write) a letter.", "is writing", "具体时间点正在做"),
    ex("Be quiet! The baby _______ (sleep).", "is sleeping", "Be quiet! 提示正在进行"),
    ex("Sam and Amy _______ (run) on the playground.", "are running", "并列主语用 are"),
];

/// 根据中文完成句子
#[rustfmt::skip]
pub static COMPLETE: &[CuedItem] = &[
    CuedItem::new("我正在做作业。", "I _______ _______ my homework.", "am doing"),
    CuedItem::new("他们正在踢足球。", "They _______ _______ football.", "are playing"),
    CuedItem::new("她正在给妈妈写信。", "She _______ _______ a letter to her mother.", "is writing"),
    CuedItem::new("你正在听音乐吗？", "_______ you _______ to music?", "Are, listening"),
    CuedItem::new("爷爷正在公园里散步。", "Grandpa _______ _______ in the park.", "is walking"),
    CuedItem::new("孩子们正在唱歌跳舞。", "The children _______ singing and _______.", "are, dancing"),
    CuedItem::new("我没有在看电视。", "I _______ _______ TV.", "am not watching"),
    CuedItem::new("小鸟们正在树上唱歌。", "The birds _______ _______ in the tree.", "are singing"),
    CuedItem::new("你爸爸正在做什么？", "What _______ your father _______?", "is, doing"),
    CuedItem::new("他正在游泳池里游泳。", "He _______ _______ in the pool.", "is swimming"),
];

/// 情景对话
pub static DIALOGUES: &[DialogueItem] = &[
    DialogueItem {
        scene: "打电话",
        lines: &[
            "A: Hello, Amy. What _______ you doing?",
            "B: I _______ cleaning my room.",
        ],
        answer: "are, am",
    },
    DialogueItem {
        scene: "在公园",
        lines: &[
            "A: Look! Is that boy flying a kite?",
            "B: No, he _______. He is _______ (ride) a bike.",
        ],
        answer: "isn't, riding",
    },
    DialogueItem {
        scene: "在家里",
        lines: &[
            "A: Where is Mum?",
            "B: She is in the kitchen. She _______ _______ (make) dinner.",
        ],
        answer: "is making",
    },
    DialogueItem {
        scene: "在教室",
        lines: &[
            "A: _______ the students reading now?",
            "B: Yes, they _______.",
        ],
        answer: "Are, are",
    },
    DialogueItem {
        scene: "在操场",
        lines: &[
            "A: What are Tom and Jim doing?",
            "B: They _______ _______ (run) a race.",
        ],
        answer: "are running",
    },
    DialogueItem {
        scene: "视频聊天",
        lines: &[
            "A: Hi, Grandma! _______ you watching TV?",
            "B: No, I'm not. I _______ _______ (water) the flowers.",
        ],
        answer: "Are, am watering",
    },
];
