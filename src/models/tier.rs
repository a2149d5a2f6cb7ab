use crate::error::ConfigError;
use phf::phf_map;

/// 练习题版本（题量档位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// 简洁版
    Concise,
    /// 完整版
    Complete,
    /// 充实版
    Enriched,
}

/// 版本名称 → 版本，中文标签与英文名均可
static TIER_LABELS: phf::Map<&'static str, Tier> = phf_map! {
    "简洁版" => Tier::Concise,
    "完整版" => Tier::Complete,
    "充实版" => Tier::Enriched,
    "concise" => Tier::Concise,
    "complete" => Tier::Complete,
    "enriched" => Tier::Enriched,
};

impl Tier {
    /// 生成顺序
    pub const ALL: [Tier; 3] = [Tier::Concise, Tier::Complete, Tier::Enriched];

    /// 文件名与副标题中使用的中文标签
    pub fn label(self) -> &'static str {
        match self {
            Tier::Concise => "简洁版",
            Tier::Complete => "完整版",
            Tier::Enriched => "充实版",
        }
    }

    /// 英文名
    pub fn name(self) -> &'static str {
        match self {
            Tier::Concise => "concise",
            Tier::Complete => "complete",
            Tier::Enriched => "enriched",
        }
    }

    /// 从版本名称解析（精确匹配，前后空白忽略）
    pub fn from_label(label: &str) -> Result<Self, ConfigError> {
        TIER_LABELS
            .get(label.trim())
            .copied()
            .ok_or_else(|| ConfigError::InvalidTier {
                name: label.to_string(),
            })
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Tier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_label(tier.label()).unwrap(), tier);
            assert_eq!(Tier::from_label(tier.name()).unwrap(), tier);
        }
    }

    #[test]
    fn test_unknown_label_is_invalid_tier() {
        let err = Tier::from_label("精简版").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTier { ref name } if name == "精简版"));
        assert!("Concise".parse::<Tier>().is_err());
    }

    #[test]
    fn test_generation_order() {
        let labels: Vec<_> = Tier::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["简洁版", "完整版", "充实版"]);
    }
}
