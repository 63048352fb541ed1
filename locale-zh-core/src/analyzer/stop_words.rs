//! Stop-word filtering.
//!
//! Drops tokens that exactly match a fixed list of high-frequency Chinese
//! function words. Matching is plain string equality on the already
//! normalized token; there is no partial or stem-aware matching.

use std::sync::Arc;

use locale_zh_types::Token;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Common Chinese function words, traditional and simplified forms mixed.
///
/// The list contains a few repeats; the filter's set collapses them.
#[rustfmt::skip]
pub const CHINESE_STOP_WORDS: &[&str] = &[
    "的", "一", "不", "在", "人", "有", "是", "為", "以", "于", "上", "他", "而", "后",
    "之", "來", "及", "了", "因", "下", "可", "到", "由", "這", "與", "也", "此", "但",
    "開", "關", "其", "已", "無", "小", "我", "們", "起", "最", "再", "今", "去", "好",
    "只", "又", "或", "很", "亦", "某", "把", "那", "你", "乃", "它", "吧", "被", "比",
    "别", "趁", "當", "從", "到", "得", "打", "凡", "而", "該", "各", "給", "跟", "和",
    "何", "這", "即", "幾", "既", "看", "据", "距", "靠", "啦", "了", "另", "麼", "每",
    "嘛", "拿", "哪", "那", "您", "且", "却", "讓", "仍", "啥", "如", "若", "使", "誰",
    "雖", "随", "同", "所", "她", "哇", "嗡", "往", "哪", "些", "向", "沿", "用", "于",
    "咱", "則", "怎", "曾", "至", "致", "着", "諸", "自",
];

static CHINESE: Lazy<StopWordFilter> = Lazy::new(|| StopWordFilter::new(CHINESE_STOP_WORDS));

/// Immutable stop-word set.
///
/// Cloning shares the underlying set.
#[derive(Debug, Clone)]
pub struct StopWordFilter {
    words: Arc<FxHashSet<Box<str>>>,
}

impl StopWordFilter {
    /// Builds a filter from a word list.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| Box::<str>::from(w.as_ref()))
            .collect();
        Self {
            words: Arc::new(words),
        }
    }

    /// Shared filter over [`CHINESE_STOP_WORDS`].
    pub fn chinese() -> StopWordFilter {
        CHINESE.clone()
    }

    /// Returns `true` if `word` is a stop word.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pipeline stage: drops stop words, passes everything else through.
    #[inline]
    pub fn filter(&self, token: Token) -> Option<Token> {
        if self.contains(token.as_str()) {
            None
        } else {
            Some(token)
        }
    }
}
