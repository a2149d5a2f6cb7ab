/// 参考答案：大题名称 → 答案列表，顺序即大题出现顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    sections: Vec<(String, Vec<String>)>,
}

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个大题的答案
    pub fn push(&mut self, section: impl Into<String>, answers: Vec<String>) {
        self.sections.push((section.into(), answers));
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .map(|(name, answers)| (name.as_str(), answers.as_slice()))
    }

    /// 查找某个大题的答案
    pub fn get(&self, section: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|(name, _)| name == section)
            .map(|(_, answers)| answers.as_slice())
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// 大题数量
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// 全部答案条数
    pub fn total_answers(&self) -> usize {
        self.sections.iter().map(|(_, answers)| answers.len()).sum()
    }
}

/// 格式化一条答案：`{n}. {answer}` 或 `{n}. {answer}（{rationale}）`
pub fn format_answer(number: usize, answer: &str, rationale: Option<&str>) -> String {
    match rationale {
        Some(rationale) => format!("{}. {}（{}）", number, answer, rationale),
        None => format!("{}. {}", number, answer),
    }
}
