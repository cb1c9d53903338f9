//! Syllabus Catalog
//!
//! Static table of exam modules for the two written-exam subjects, plus the
//! filtering and weight queries the browser views are built from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

// ============================================================================
// Subject Category
// ============================================================================

/// Written-exam subject a syllabus entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubjectCategory {
    /// 行政职业能力测验 (Administrative Aptitude Test)
    Xingce,
    /// 综合应用能力 / 申论 (Comprehensive Application)
    Zonghe,
}

impl SubjectCategory {
    pub const ALL: [SubjectCategory; 2] = [Self::Xingce, Self::Zonghe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xingce => "XINGCE",
            Self::Zonghe => "ZONGHE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Xingce => "行政职业能力测验",
            Self::Zonghe => "综合应用能力 (申论)",
        }
    }

    /// Heading of the syllabus list for this subject
    pub fn syllabus_heading(&self) -> &'static str {
        match self {
            Self::Xingce => "行测科目大纲 (XingCe)",
            Self::Zonghe => "申论/综合应用大纲 (ZongHe)",
        }
    }

    /// Heading of the strategy card for this subject
    pub fn strategy_heading(&self) -> &'static str {
        match self {
            Self::Xingce => "行测高分策略",
            Self::Zonghe => "申论/综合应用策略",
        }
    }
}

impl fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XINGCE" => Ok(Self::Xingce),
            "ZONGHE" => Ok(Self::Zonghe),
            other => Err(format!("unknown subject category: {}", other)),
        }
    }
}

// ============================================================================
// Icon Tag
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum IconTag {
    Globe,
    MessageSquare,
    Calculator,
    Brain,
    PieChart,
    BookOpen,
    Search,
    PenTool,
    Layout,
    FileText,
}

impl IconTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Globe => "globe",
            Self::MessageSquare => "message-square",
            Self::Calculator => "calculator",
            Self::Brain => "brain",
            Self::PieChart => "pie-chart",
            Self::BookOpen => "book-open",
            Self::Search => "search",
            Self::PenTool => "pen-tool",
            Self::Layout => "layout",
            Self::FileText => "file-text",
        }
    }

    /// Unknown tags render as the generic document icon.
    pub fn parse_tag(s: &str) -> Self {
        match s {
            "globe" => Self::Globe,
            "message-square" => Self::MessageSquare,
            "calculator" => Self::Calculator,
            "brain" => Self::Brain,
            "pie-chart" => Self::PieChart,
            "book-open" => Self::BookOpen,
            "search" => Self::Search,
            "pen-tool" => Self::PenTool,
            "layout" => Self::Layout,
            _ => Self::FileText,
        }
    }
}

impl From<String> for IconTag {
    fn from(s: String) -> Self {
        Self::parse_tag(&s)
    }
}

// ============================================================================
// Syllabus Entry
// ============================================================================

/// One exam module of the published syllabus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabusEntry {
    pub id: &'static str,
    pub category: SubjectCategory,
    pub title: &'static str,
    pub description: &'static str,
    /// Approximate share of the subject score, in percent
    pub score_weight: Option<u8>,
    pub sub_topics: &'static [&'static str],
    pub icon: IconTag,
}

/// Syllabus entry as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusEntryResponse {
    pub id: String,
    pub category: SubjectCategory,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_weight: Option<u8>,
    pub sub_topics: Vec<String>,
    pub icon_name: IconTag,
}

impl From<&SyllabusEntry> for SyllabusEntryResponse {
    fn from(entry: &SyllabusEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            category: entry.category,
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            score_weight: entry.score_weight,
            sub_topics: entry.sub_topics.iter().map(|s| s.to_string()).collect(),
            icon_name: entry.icon,
        }
    }
}

/// One slice of the score-weight pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeightSlice {
    pub name: String,
    pub value: u8,
}

/// Pie-chart data for one subject
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeightDistributionResponse {
    pub category: SubjectCategory,
    pub slices: Vec<WeightSlice>,
    /// Sum of the slice values, expected to be about 100
    pub total: u32,
}

/// Subject tab metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: SubjectCategory,
    pub display_name: String,
    pub syllabus_heading: String,
    pub strategy_heading: String,
}

impl From<SubjectCategory> for CategoryInfo {
    fn from(category: SubjectCategory) -> Self {
        Self {
            id: category,
            display_name: category.display_name().to_string(),
            syllabus_heading: category.syllabus_heading().to_string(),
            strategy_heading: category.strategy_heading().to_string(),
        }
    }
}

static CATALOG: [SyllabusEntry; 10] = [
    // --- 行测 ---
    SyllabusEntry {
        id: "xc-1",
        category: SubjectCategory::Xingce,
        title: "常识判断 (General Knowledge)",
        description: "测查报考者在政治、经济、文化、科技等方面应知应会的基本知识。近年来越来越侧重时政与习近平新时代中国特色社会主义思想。",
        score_weight: Some(10),
        sub_topics: &[
            "政治理论 (时政、马克思主义哲学)",
            "法律常识 (宪法、民法典、刑法、行政法)",
            "经济常识 (微观/宏观经济、国际贸易)",
            "人文历史 (中国古代史、文学常识)",
            "科技地理 (前沿科技、物理化学常识)",
        ],
        icon: IconTag::Globe,
    },
    SyllabusEntry {
        id: "xc-2",
        category: SubjectCategory::Xingce,
        title: "言语理解与表达 (Language Understanding)",
        description: "测查运用语言文字进行思考和交流的能力。这是行测中题量最大、分值占比极高的模块。",
        score_weight: Some(30),
        sub_topics: &[
            "逻辑填空 (实词、成语辨析)",
            "片段阅读 (主旨概括、意图推断、细节理解)",
            "语句表达 (语句排序、语句衔接、下文推断)",
        ],
        icon: IconTag::MessageSquare,
    },
    SyllabusEntry {
        id: "xc-3",
        category: SubjectCategory::Xingce,
        title: "数量关系 (Quantitative Relations)",
        description: "测查理解、把握事物间量化关系和解决数量关系问题的能力。通常被认为是行测中最难的模块。",
        score_weight: Some(10),
        sub_topics: &[
            "数学运算 (工程问题、行程问题、排列组合)",
            "高频考点 (概率问题、几何问题、容斥原理)",
            "数字推理 (部分省考/事业单位考察)",
        ],
        icon: IconTag::Calculator,
    },
    SyllabusEntry {
        id: "xc-4",
        category: SubjectCategory::Xingce,
        title: "判断推理 (Reasoning)",
        description: "测查对各种事物关系的分析推理能力。题型分类严谨，技巧性强。",
        score_weight: Some(30),
        sub_topics: &[
            "图形推理 (位置、样式、属性、数量、六面体)",
            "定义判断 (单定义、多定义)",
            "类比推理 (词义关系、逻辑关系、语法关系)",
            "逻辑判断 (翻译推理、加强削弱、真假推理)",
        ],
        icon: IconTag::Brain,
    },
    SyllabusEntry {
        id: "xc-5",
        category: SubjectCategory::Xingce,
        title: "资料分析 (Data Analysis)",
        description: "测查对文字、图表等资料的综合理解与分析加工能力。是行测中\"性价比\"最高的模块，要求高正确率。",
        score_weight: Some(20),
        sub_topics: &[
            "基础计算 (增长率、增长量、比重、平均数)",
            "高阶技巧 (倍数、基期现期、混合增长率)",
            "综合分析 (多条数据综合判断)",
        ],
        icon: IconTag::PieChart,
    },
    // --- 综合应用 / 申论 ---
    SyllabusEntry {
        id: "zh-1",
        category: SubjectCategory::Zonghe,
        title: "归纳概括 (Summarization)",
        description: "申论考试的基础题型。要求全面把握给定资料的内容，准确提炼事实所包含的观点。",
        score_weight: Some(15),
        sub_topics: &["单一式概括", "综合式概括", "归纳分类"],
        icon: IconTag::BookOpen,
    },
    SyllabusEntry {
        id: "zh-2",
        category: SubjectCategory::Zonghe,
        title: "综合分析 (Comprehensive Analysis)",
        description: "对给定资料的全部或部分的内容、观点或问题进行分析和归纳，多角度地思考资料内容。",
        score_weight: Some(20),
        sub_topics: &[
            "要素分析 (原因、影响、启示)",
            "词句理解 (解释概念/观点)",
            "评价分析 (评论现象/观点)",
        ],
        icon: IconTag::Search,
    },
    SyllabusEntry {
        id: "zh-3",
        category: SubjectCategory::Zonghe,
        title: "提出对策 (Problem Solving)",
        description: "准确理解把握给定资料所反映的问题，提出解决问题的措施或办法。侧重实务能力。",
        score_weight: Some(15),
        sub_topics: &["单一对策题", "概括+对策复合题", "应急处理 (部分执法类岗)"],
        icon: IconTag::PenTool,
    },
    SyllabusEntry {
        id: "zh-4",
        category: SubjectCategory::Zonghe,
        title: "贯彻执行 (Implementation)",
        description: "能够准确理解工作目标和组织意图，依法行政，完成特定文书的撰写。",
        score_weight: Some(20),
        sub_topics: &[
            "宣传类文书 (倡议书、公开信)",
            "方案类文书 (工作方案、调研报告)",
            "总结类文书 (工作总结、简报)",
        ],
        icon: IconTag::Layout,
    },
    SyllabusEntry {
        id: "zh-5",
        category: SubjectCategory::Zonghe,
        title: "申发论述 (Essay Writing)",
        description: "即\"大作文\"。熟练使用指定的语种，运用说明、陈述、议论等方式，准确规范、简明畅达地表述思想观点。",
        score_weight: Some(30),
        sub_topics: &["策论文 (侧重对策)", "政论文 (侧重分析)", "思辨型作文"],
        icon: IconTag::FileText,
    },
];

/// All syllabus entries in table order
pub fn catalog() -> &'static [SyllabusEntry] {
    &CATALOG
}

pub fn entries_by_category(category: SubjectCategory) -> Vec<&'static SyllabusEntry> {
    CATALOG.iter().filter(|e| e.category == category).collect()
}

pub fn find_entry(id: &str) -> Option<&'static SyllabusEntry> {
    CATALOG.iter().find(|e| e.id == id)
}

/// Pie-chart data for one subject; entries without a weight count as 0
pub fn weight_distribution(category: SubjectCategory) -> Vec<WeightSlice> {
    entries_by_category(category)
        .into_iter()
        .map(|e| WeightSlice { name: e.title.to_string(), value: e.score_weight.unwrap_or(0) })
        .collect()
}

/// Sum of weights for one subject. Expected to be about 100, not enforced.
pub fn category_weight_total(category: SubjectCategory) -> u32 {
    entries_by_category(category)
        .iter()
        .map(|e| u32::from(e.score_weight.unwrap_or(0)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_filter_xingce_returns_exactly_its_entries() {
        let entries = entries_by_category(SubjectCategory::Xingce);
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e.category == SubjectCategory::Xingce));
        let ids: Vec<_> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["xc-1", "xc-2", "xc-3", "xc-4", "xc-5"]);
    }

    #[test]
    fn test_filter_zonghe_returns_exactly_its_entries() {
        let entries = entries_by_category(SubjectCategory::Zonghe);
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e.category == SubjectCategory::Zonghe));
        assert!(entries.iter().all(|e| e.id.starts_with("zh-")));
    }

    #[test]
    fn test_weights_in_percent_range() {
        for entry in catalog() {
            let weight = entry.score_weight.expect("every catalog entry carries a weight");
            assert!(weight <= 100, "{} has weight {}", entry.id, weight);
        }
    }

    #[test]
    fn test_category_weights_sum_to_hundred() {
        assert_eq!(category_weight_total(SubjectCategory::Xingce), 100);
        assert_eq!(category_weight_total(SubjectCategory::Zonghe), 100);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_weight_distribution_follows_table_order() {
        let slices = weight_distribution(SubjectCategory::Zonghe);
        let values: Vec<u8> = slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![15, 20, 15, 20, 30]);
        assert_eq!(slices[4].name, "申发论述 (Essay Writing)");
    }

    #[test]
    fn test_find_entry() {
        let entry = find_entry("xc-4").unwrap();
        assert_eq!(entry.title, "判断推理 (Reasoning)");
        assert_eq!(entry.sub_topics.len(), 4);
        assert!(find_entry("xc-9").is_none());
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("xingce".parse::<SubjectCategory>().unwrap(), SubjectCategory::Xingce);
        assert_eq!(" ZONGHE ".parse::<SubjectCategory>().unwrap(), SubjectCategory::Zonghe);
        assert!("SHENLUN".parse::<SubjectCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_upper_case() {
        let json = serde_json::to_string(&SubjectCategory::Xingce).unwrap();
        assert_eq!(json, "\"XINGCE\"");
    }

    #[test]
    fn test_icon_tag_parse_defaults_to_file_text() {
        assert_eq!(IconTag::parse_tag("pie-chart"), IconTag::PieChart);
        assert_eq!(IconTag::parse_tag("unknown"), IconTag::FileText);
        for entry in catalog() {
            assert_eq!(IconTag::parse_tag(entry.icon.as_str()), entry.icon);
        }
    }

    #[test]
    fn test_icon_tag_deserializes_unknown_as_file_text() {
        let tag: IconTag = serde_json::from_str("\"message-square\"").unwrap();
        assert_eq!(tag, IconTag::MessageSquare);

        let entry = SyllabusEntryResponse::from(find_entry("xc-4").unwrap());
        let mut value = serde_json::to_value(&entry).unwrap();
        value["iconName"] = serde_json::json!("sparkles");
        let response: SyllabusEntryResponse = serde_json::from_value(value).unwrap();
        assert_eq!(response.icon_name, IconTag::FileText);
    }

    #[test]
    fn test_entry_response_shape() {
        let response = SyllabusEntryResponse::from(find_entry("zh-3").unwrap());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["category"], "ZONGHE");
        assert_eq!(value["scoreWeight"], 15);
        assert_eq!(value["iconName"], "pen-tool");
        assert_eq!(value["subTopics"].as_array().unwrap().len(), 3);
    }
}
