//! 第7天：一般将来时 题库

use crate::models::{CuedItem, DialogueItem, ExerciseItem};

const fn ex(prompt: &'static str, answer: &'static str, rationale: &'static str) -> ExerciseItem {
    ExerciseItem::explained(prompt, answer, rationale)
}

/// 用 be going to 填空
#[rustfmt::skip]
pub static GOING_TO_FILL: &[ExerciseItem] = &[
    ex("I _______ _______ _______ visit my aunt tomorrow.", "am going to", "主语 I 用 am"),
    ex("She _______ _______ _______ buy a new dress.", "is going to", "主语单数用 is"),
    ex("We _______ _______ _______ have a picnic this weekend.", "are going to", "主语复数用 are"),
    ex("_______ you _______ _______ see a film tonight?", "Are, going to", "疑问句 be 动词提前"),
    ex("He _______ _______ _______ _______ play basketball next week.（否定）", "is not going to", "否定在 be 后加 not"),
    ex("What _______ they _______ _______ do this afternoon?", "are, going to", "特殊疑问句"),
    ex("My parents _______ _______ _______ travel to Hainan.", "are going to", "主语复数用 are"),
    ex("It _______ _______ _______ rain tomorrow.", "is going to", "根据迹象推测"),
    ex("Where _______ Amy _______ _______ go next Sunday?", "is, going to", "特殊疑问句"),
    ex("I _______ _______ _______ _______ stay at home tonight.", "am not going to", "否定在 am 后加 not"),
];

/// 用 will 完成句子：中文 + 英文句子 + 答案
#[rustfmt::skip]
pub static WILL_COMPLETE: &[CuedItem] = &[
    CuedItem::new("明天我将去看望我的朋友。", "I _______ _______ my friend tomorrow.", "will visit"),
    CuedItem::new("他明年将会是一名中学生。", "He _______ _______ a middle school student next year.", "will be"),
    CuedItem::new("明天会下雨吗？", "_______ it _______ tomorrow?", "Will, rain"),
    CuedItem::new("我们不会迟到的。", "We _______ _______ late.", "won't be"),
    CuedItem::new("她将在下周到达北京。", "She _______ _______ in Beijing next week.", "will arrive"),
    CuedItem::new("你以后会当老师吗？", "_______ you _______ a teacher in the future?", "Will, be"),
    CuedItem::new("我会帮你的。", "I _______ _______ you.", "will help"),
    CuedItem::new("他们明天不会去公园。", "They _______ _______ to the park tomorrow.", "won't go"),
    CuedItem::new("这个周末天气会很晴朗。", "It _______ _______ sunny this weekend.", "will be"),
    CuedItem::new("二十年后机器人会做家务。", "Robots _______ _______ housework in twenty years.", "will do"),
];

/// 按要求改写句子
#[rustfmt::skip]
pub static TRANSFORM: &[CuedItem] = &[
    CuedItem::new("改为一般疑问句", "They are going to play football.", "Are they going to play football?"),
    CuedItem::new("改为否定句", "I will go swimming tomorrow.", "I won't go swimming tomorrow."),
    CuedItem::new("改为一般疑问句", "She will be twelve next year.", "Will she be twelve next year?"),
    CuedItem::new("改为否定句", "He is going to buy a comic book.", "He isn't going to buy a comic book."),
    CuedItem::new("用 tomorrow 改写", "I read books in the library every day.", "I am going to read books in the library tomorrow."),
    CuedItem::new("对划线部分提问（划线：by train）", "We are going to travel by train.", "How are you going to travel?"),
    CuedItem::new("改为一般疑问句", "Tom will visit his grandma next Monday.", "Will Tom visit his grandma next Monday?"),
    CuedItem::new("改为否定句", "It is going to snow tonight.", "It isn't going to snow tonight."),
    CuedItem::new("对划线部分提问（划线：this Sunday）", "My mother will cook for us this Sunday.", "When will your mother cook for you?"),
    CuedItem::new("用 next week 改写", "She visited the science museum last week.", "She is going to visit the science museum next week."),
];

/// 情景对话
pub static DIALOGUES: &[DialogueItem] = &[
    DialogueItem {
        scene: "周末计划",
        lines: &[
            "A: What are you going to do this weekend?",
            "B: I _______ going to visit my grandparents.",
        ],
        answer: "am",
    },
    DialogueItem {
        scene: "天气",
        lines: &[
            "A: _______ it be sunny tomorrow?",
            "B: No, it _______. It will be rainy.",
        ],
        answer: "Will, won't",
    },
    DialogueItem {
        scene: "假期旅行",
        lines: &[
            "A: Where _______ you going to go for the summer holiday?",
            "B: We're going to Xi'an.",
            "A: How are you going there?",
            "B: We are going _______ plane.",
        ],
        answer: "are, by",
    },
    DialogueItem {
        scene: "生日派对",
        lines: &[
            "A: _______ is Amy going to have her birthday party?",
            "B: Next Saturday. She is going _______ invite ten friends.",
        ],
        answer: "When, to",
    },
    DialogueItem {
        scene: "未来理想",
        lines: &[
            "A: What will you be in the future?",
            "B: I _______ be a doctor. I want to _______ (help) sick people.",
        ],
        answer: "will, help",
    },
];
