//! # 替换规则引擎
//!
//! 按固定顺序对同一段文本依次执行正则替换，并累计替换次数。
//!
//! ## 功能
//! - `Rule`: 单条 (pattern, replacement) 替换指令
//! - `RuleSet`: 有序规则列表，后一条规则看到的是前一条规则的输出
//! - 支持前后查找断言（`fancy-regex`）
//! - 纯函数，不做任何 I/O
//!
//! ## 依赖关系
//! - 被 `batch/processor.rs` 使用
//! - 子模块: presets（内置规则集）

pub mod presets;

use crate::error::{ResubError, Result};

use fancy_regex::Regex;
use std::borrow::Cow;
use std::str::FromStr;

/// 命令行规则写法中 pattern 与 replacement 的分隔符
pub const RULE_SEPARATOR: &str = "=>";

/// 单条替换规则
///
/// replacement 中 `$1`、`${1}`、`$name` 展开为捕获组，`$$` 表示字面量 `$`。
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// 编译正则并创建规则
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| ResubError::InvalidRule {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            pattern: regex,
            replacement: replacement.to_string(),
        })
    }

    /// 字面量规则：pattern 与 replacement 都按原样匹配和写入
    pub fn literal(pattern: &str, replacement: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(ResubError::InvalidRule {
                pattern: String::new(),
                reason: "literal pattern must not be empty".to_string(),
            });
        }
        Self::new(&regex::escape(pattern), &replacement.replace('$', "$$"))
    }

    /// 正则表达式源码
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// 替换模板
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// 对文本做全局替换，返回新文本与匹配次数
    ///
    /// 零匹配时返回借用的原文本。
    pub fn apply<'t>(&self, text: &'t str) -> Result<(Cow<'t, str>, usize)> {
        let mut count = 0;
        for found in self.pattern.find_iter(text) {
            found.map_err(|e| self.runtime_error(e))?;
            count += 1;
        }

        if count == 0 {
            return Ok((Cow::Borrowed(text), 0));
        }

        let replaced = self
            .pattern
            .try_replacen(text, 0, self.replacement.as_str())
            .map_err(|e| self.runtime_error(e))?;

        Ok((replaced, count))
    }

    fn runtime_error(&self, err: fancy_regex::Error) -> ResubError {
        ResubError::RegexRuntime {
            pattern: self.pattern().to_string(),
            reason: err.to_string(),
        }
    }
}

/// 从 `PATTERN=>REPLACEMENT` 解析规则（按第一个分隔符切分）
impl FromStr for Rule {
    type Err = ResubError;

    fn from_str(s: &str) -> Result<Self> {
        let (pattern, replacement) = s.split_once(RULE_SEPARATOR).ok_or_else(|| {
            ResubError::InvalidArgument(format!(
                "rule '{}' must have the form PATTERN{}REPLACEMENT",
                s, RULE_SEPARATOR
            ))
        })?;

        if pattern.is_empty() {
            return Err(ResubError::InvalidArgument(format!(
                "rule '{}' has an empty pattern",
                s
            )));
        }

        Rule::new(pattern, replacement)
    }
}

/// 单次规则集执行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// 替换后的文本
    pub text: String,
    /// 所有规则的替换次数之和
    pub count: usize,
}

/// 有序规则集
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// 创建空规则集
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条规则（构建器风格）
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 依次执行所有规则
    ///
    /// 每条规则作用于上一条规则的输出；规则间冲突不做检测。
    pub fn apply(&self, text: &str) -> Result<Substitution> {
        let mut buffer = text.to_string();
        let mut count = 0;

        for rule in &self.rules {
            let (replaced, n) = rule.apply(&buffer)?;
            if n > 0 {
                buffer = replaced.into_owned();
                count += n;
            }
        }

        Ok(Substitution {
            text: buffer,
            count,
        })
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
