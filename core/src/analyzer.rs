//! Task analyzer: free-text task description → weighted category tags.
//!
//! RULES:
//!   - Categories are tried in table order; output follows the same order.
//!   - At most one tag per category: the first keyword hit wins.
//!   - A tag's weight is the number of keywords the category defines,
//!     not the number of keywords found.
//!   - Matching is substring containment on lower-cased text. A keyword
//!     buried inside an unrelated word still counts.

use crate::diag::DiagnosticSink;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One detected category and the weight it carries into scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTag {
    pub category: String,
    pub weight:   u32,
}

impl TaskTag {
    pub fn new(category: impl Into<String>, weight: u32) -> Self {
        Self { category: category.into(), weight }
    }
}

impl fmt::Display for TaskTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.weight)
    }
}

/// Category → trigger keywords, in evaluation order.
///
/// Keywords are stored lower-cased. Duplicates are intentional: they
/// count toward the category weight.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    // Code generation. "api" was "API" in the source keyword list, where it
    // could never match lower-cased text; stored lower-cased it now does.
    ("code-gen", &[
        "コード", "プログラム", "api", "エンドポイント", "関数",
        "クラス", "実装", "開発", "コンポーネント", "ライブラリ",
    ]),
    // Analysis / research
    ("analysis", &[
        "分析", "調査", "リサーチ", "レポート", "データ", "統計", "調査",
    ]),
    // Writing
    ("writing", &[
        "文章", "ブログ", "ドキュメント", "要約", "ライティング", "投稿", "記述",
    ]),
    // Debugging
    ("debugging", &[
        "デバッグ", "バグ", "エラー", "問題", "修正", "トラブル", "デバック",
    ]),
    // Architecture / design
    ("architecture", &[
        "アーキテクチャ", "設計", "構成", "パターン", "アンテナ",
    ]),
    // Strategy / decision making
    ("leadership", &[
        "戦略", "意思決定", "レビュー", "マネジメント", "プランニング", "決定",
    ]),
];

/// Weight a category contributes when detected. `None` for unknown categories.
pub fn category_weight(category: &str) -> Option<u32> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, words)| words.len() as u32)
}

/// Analyze a task description into its weighted category tags.
pub fn analyze(task_description: &str, sink: &dyn DiagnosticSink) -> Vec<TaskTag> {
    let task = task_description.to_lowercase();

    let tags: Vec<TaskTag> = CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, words)| words.iter().any(|word| task.contains(word)))
        .map(|(category, words)| TaskTag::new(*category, words.len() as u32))
        .collect();

    sink.info(&format!("analyzed keywords: [{}]", format_tags(&tags)));
    tags
}

/// `category:weight` pairs joined with ", ".
pub fn format_tags(tags: &[TaskTag]) -> String {
    tags.iter()
        .map(TaskTag::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
