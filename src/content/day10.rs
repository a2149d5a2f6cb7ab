//! 第10天：阅读理解 题库

use crate::models::{DialogueItem, ExerciseItem, Passage};

const fn ex(prompt: &'static str, answer: &'static str, rationale: &'static str) -> ExerciseItem {
    ExerciseItem::explained(prompt, answer, rationale)
}

const fn qa(prompt: &'static str, answer: &'static str) -> ExerciseItem {
    ExerciseItem::new(prompt, answer)
}

/// 阅读短文，判断正误
#[rustfmt::skip]
pub static TRUE_FALSE: &[Passage] = &[
    Passage {
        title: "My Weekend",
        lines: &[
            "Hello, I'm Amy. Last weekend was busy. On Saturday morning, I did my homework.",
            "In the afternoon, I went to the park with my mother. We flew a kite there.",
            "On Sunday, I visited my grandparents. My grandma cooked a big dinner for us.",
            "I was tired, but I was very happy.",
        ],
        questions: &[
            ex("Amy did her homework on Saturday morning.", "T", "On Saturday morning, I did my homework."),
            ex("Amy went to the park with her father.", "F", "她和妈妈去了公园"),
            ex("Amy visited her grandparents on Sunday.", "T", "On Sunday, I visited my grandparents."),
            ex("Amy was not happy last weekend.", "F", "I was very happy."),
        ],
    },
    Passage {
        title: "Tom's School",
        lines: &[
            "Tom is a student in Grade Six. His school is big and beautiful.",
            "There is a library next to the playground. Tom often reads books there.",
            "He likes science best because his science teacher is very funny.",
            "After school, he plays football with his friends.",
        ],
        questions: &[
            ex("Tom is in Grade Five.", "F", "Tom 在六年级"),
            ex("The library is next to the playground.", "T", "There is a library next to the playground."),
            ex("Tom's favourite subject is English.", "F", "他最喜欢科学"),
            ex("Tom plays football after school.", "T", "After school, he plays football."),
        ],
    },
    Passage {
        title: "A Trip to Beijing",
        lines: &[
            "Next summer, Lily is going to visit Beijing with her parents.",
            "They are going to go there by train. They will stay for five days.",
            "Lily is going to climb the Great Wall and visit the Palace Museum.",
            "She is also going to eat Beijing roast duck. She can't wait!",
        ],
        questions: &[
            ex("Lily is going to Beijing next winter.", "F", "是明年夏天"),
            ex("They are going to travel by train.", "T", "They are going to go there by train."),
            ex("They will stay in Beijing for a week.", "F", "他们待五天"),
            ex("Lily wants to eat Beijing roast duck.", "T", "She is also going to eat Beijing roast duck."),
        ],
    },
];

/// 阅读短文，回答问题
pub static QUESTIONS: &[Passage] = &[
    Passage {
        title: "Mike's Day",
        lines: &[
            "Mike gets up at 6:30 every morning. He has milk and bread for breakfast.",
            "He goes to school by bike. Classes begin at 8:00.",
            "He has lunch at school. After school, he often plays basketball.",
            "He goes to bed at 9:30 in the evening.",
        ],
        questions: &[
            qa("What time does Mike get up?", "He gets up at 6:30."),
            qa("How does Mike go to school?", "He goes to school by bike."),
            qa("What does Mike often do after school?", "He often plays basketball."),
        ],
    },
    Passage {
        title: "Sarah's Pet",
        lines: &[
            "Sarah has a pet dog. Its name is Lucky. Lucky is white and very cute.",
            "It likes eating meat and playing with a ball.",
            "Every evening, Sarah takes Lucky for a walk in the park.",
            "Sarah loves Lucky very much, and Lucky loves her too.",
        ],
        questions: &[
            qa("What is the name of Sarah's dog?", "Its name is Lucky."),
            qa("What does Lucky like eating?", "It likes eating meat."),
            qa("When does Sarah take Lucky for a walk?", "Every evening."),
        ],
    },
    Passage {
        title: "Chen Jie's Hobby",
        lines: &[
            "Chen Jie likes drawing. She started drawing when she was five.",
            "Last month, she won first prize in a drawing competition.",
            "Now she draws pictures of animals and flowers every weekend.",
            "She wants to be an artist in the future.",
        ],
        questions: &[
            qa("What is Chen Jie's hobby?", "Her hobby is drawing. / She likes drawing."),
            qa("What did she win last month?", "She won first prize in a drawing competition."),
            qa("What does she want to be in the future?", "She wants to be an artist."),
        ],
    },
];

/// 补全对话
pub static DIALOGUES: &[DialogueItem] = &[
    DialogueItem {
        scene: "问路",
        lines: &[
            "A: Excuse me. _______ is the post office?",
            "B: It's next to the bookstore.",
            "A: _______ can I get there?",
            "B: You can go by bus.",
        ],
        answer: "Where, How",
    },
    DialogueItem {
        scene: "谈论爱好",
        lines: &[
            "A: What _______ you like doing?",
            "B: I like singing. _______ about you?",
            "A: I like reading stories.",
        ],
        answer: "do, What",
    },
    DialogueItem {
        scene: "看病",
        lines: &[
            "A: What's the _______ with you?",
            "B: I have a fever.",
            "A: You should _______ some medicine and stay in bed.",
        ],
        answer: "matter, take",
    },
    DialogueItem {
        scene: "购物",
        lines: &[
            "A: Can I help you?",
            "B: Yes. I want a pair of shoes.",
            "A: What _______ do you wear?",
            "B: Size 36. How _______ are they?",
            "A: They are 120 yuan.",
        ],
        answer: "size, much",
    },
];
