//! 第4天：一般现在时 题库

use crate::models::{ChoiceItem, ExerciseItem};

const fn ex(prompt: &'static str, answer: &'static str, rationale: &'static str) -> ExerciseItem {
    ExerciseItem::explained(prompt, answer, rationale)
}

/// 动词第三人称单数形式
pub static THIRD_PERSON: &[ExerciseItem] = &[
    ex("play", "plays", "一般情况直接加 s"),
    ex("watch", "watches", "以 ch 结尾加 es"),
    ex("go", "goes", "以 o 结尾加 es"),
    ex("study", "studies", "辅音字母 + y 结尾，变 y 为 i 加 es"),
    ex("have", "has", "不规则变化"),
    ex("wash", "washes", "以 sh 结尾加 es"),
    ex("fly", "flies", "辅音字母 + y 结尾，变 y 为 i 加 es"),
    ex("do", "does", "以 o 结尾加 es"),
    ex("fix", "fixes", "以 x 结尾加 es"),
    ex("stay", "stays", "元音字母 + y 结尾直接加 s"),
    ex("read", "reads", "一般情况直接加 s"),
    ex("teach", "teaches", "以 ch 结尾加 es"),
];

/// 用括号内动词的适当形式填空
pub static VERB_FILL: &[ExerciseItem] = &[
    ex("My sister _______ (like) music very much.", "likes", "主语第三人称单数"),
    ex("They _______ (go) to school by bus.", "go", "主语复数用原形"),
    ex("He _______ (not watch) TV on school days.", "doesn't watch", "否定句用 doesn't + 原形"),
    ex("_______ your father _______ (work) in a hospital?", "Does, work", "疑问句用 Does + 原形"),
    ex("The sun _______ (rise) in the east.", "rises", "客观真理用一般现在时"),
    ex("We often _______ (play) basketball after school.", "play", "often 表示经常性动作"),
    ex("Amy _______ (have) a lovely cat.", "has", "have 的第三人称单数是 has"),
    ex("Mike _______ (study) English every morning.", "studies", "辅音字母 + y 变 y 为 i 加 es"),
    ex("I _______ (not like) carrots.", "don't like", "主语 I 用 don't"),
    ex("My mother usually _______ (cook) dinner for us.", "cooks", "usually 表示习惯"),
    ex("What time _______ he _______ (get) up?", "does, get", "特殊疑问句用 does + 原形"),
    ex("Water _______ (boil) at 100°C.", "boils", "客观事实用一般现在时"),
];

/// 单项选择
#[rustfmt::skip]
pub static CHOICES: &[ChoiceItem] = &[
    ChoiceItem::new("He _______ to school every day.", ["go", "goes", "going"], 1, "主语 He 是第三人称单数"),
    ChoiceItem::new("_______ you like English?", ["Do", "Does", "Are"], 0, "主语 you 用 Do"),
    ChoiceItem::new("My father _______ coffee.", ["don't drink", "doesn't drink", "not drink"], 1, "第三人称单数否定用 doesn't"),
    ChoiceItem::new("We _______ our grandparents on Sundays.", ["visit", "visits", "visiting"], 0, "主语复数用原形"),
    ChoiceItem::new("Does she _______ a new bike?", ["has", "have", "having"], 1, "does 后接动词原形"),
    ChoiceItem::new("The earth _______ around the sun.", ["move", "moves", "moving"], 1, "客观真理用一般现在时"),
    ChoiceItem::new("Lucy and Lily _______ in the same class.", ["is", "am", "are"], 2, "并列主语为复数"),
    ChoiceItem::new("— Does Tom like swimming? — _______.", ["Yes, he does", "Yes, he is", "No, he isn't"], 0, "用 does 问，用 does 答"),
    ChoiceItem::new("She _______ her homework at 7 p.m.", ["do", "does", "doing"], 1, "主语 She 是第三人称单数"),
    ChoiceItem::new("I usually _______ up at six.", ["get", "gets", "getting"], 0, "主语 I 用原形"),
];

/// 改错：原句 + 正确句子 + 解析
#[rustfmt::skip]
pub static CORRECTIONS: &[ExerciseItem] = &[
    ex("He like apples.", "He likes apples.", "like → likes，主语第三人称单数"),
    ex("She don't go to school on Sundays.", "She doesn't go to school on Sundays.", "don't → doesn't"),
    ex("Do your brother play football?", "Does your brother play football?", "Do → Does"),
    ex("They plays games after class.", "They play games after class.", "plays → play，主语复数"),
    ex("My mother cook breakfast every morning.", "My mother cooks breakfast every morning.", "cook → cooks"),
    ex("Does he likes music?", "Does he like music?", "likes → like，does 后接原形"),
    ex("Tom haves a big family.", "Tom has a big family.", "haves → has"),
    ex("I goes to the park on weekends.", "I go to the park on weekends.", "goes → go，主语 I 用原形"),
    ex("The cat sleep on the sofa every afternoon.", "The cat sleeps on the sofa every afternoon.", "sleep → sleeps"),
    ex("We doesn't have art class today.", "We don't have art class today.", "doesn't → don't，主语复数"),
];
