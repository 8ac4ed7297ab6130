//! 文本排序键（区分数字的自然排序）
//!
//! 比较规则分三层：
//! 1. 主层：连续的 ASCII 数字按数值比较（忽略前导零），字母按去掉变音符号后的
//!    基本字母比较且忽略大小写，空白和标点排在数字之前，数字排在字母之前；
//! 2. 次层：主层相同时，不带变音符号的排在前面（`e` < `é`，`е` < `ё`）；
//! 3. 末层：前两层相同时，小写排在大写之前，前导零少的排在前面。

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// 主层比较单元，变体顺序即类别顺序
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Element {
    /// 空白与标点
    Symbol(char),
    /// 数字串：(有效位数, 去掉前导零的数字)
    Number(usize, String),
    /// 字母及其他字符（基本字母，已转小写）
    Letter(char),
}

/// 预先计算好的排序键
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<Element>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<u32>,
}

impl CollationKey {
    /// 为文本生成排序键
    pub fn new(text: &str) -> Self {
        let mut primary = Vec::new();
        let mut secondary = Vec::new();
        let mut tertiary = Vec::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c.is_ascii_digit() {
                let mut digits = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    digits.push(next);
                    chars.next();
                }
                let significant = digits.trim_start_matches('0');
                let significant = if significant.is_empty() {
                    "0"
                } else {
                    significant
                };
                let leading_zeros = digits.len() - significant.len();
                primary.push(Element::Number(
                    significant.len(),
                    significant.to_string(),
                ));
                secondary.push(Vec::new());
                tertiary.push(leading_zeros as u32);
            } else if c.is_alphanumeric() {
                let (base, marks) = split_marks(c);
                let folded = base.to_lowercase().next().unwrap_or(base);
                primary.push(Element::Letter(folded));
                secondary.push(marks);
                tertiary.push(u32::from(base != folded));
            } else {
                primary.push(Element::Symbol(c));
                secondary.push(Vec::new());
                tertiary.push(0);
            }
        }

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

/// 拆分出基本字母和变音符号
///
/// `й` 在西里尔字母表中是独立字母，不拆分。
fn split_marks(c: char) -> (char, Vec<char>) {
    if matches!(c, 'й' | 'Й') {
        return (c, Vec::new());
    }

    let mut base = None;
    let mut marks = Vec::new();
    decompose_canonical(c, |part| {
        if base.is_none() && !is_combining_mark(part) {
            base = Some(part);
        } else {
            marks.push(part);
        }
    });
    (base.unwrap_or(c), marks)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn compare_text(a: &str, b: &str) -> Ordering {
        CollationKey::new(a).cmp(&CollationKey::new(b))
    }

    #[rstest]
    #[case("2", "10", Ordering::Less)]
    #[case("10", "2", Ordering::Greater)]
    #[case("item2", "item10", Ordering::Less)]
    #[case("abc", "ABD", Ordering::Less)]
    #[case("anna", "Anna", Ordering::Less)]
    #[case("a", "ab", Ordering::Less)]
    #[case("007", "7", Ordering::Greater)]
    #[case("7", "7", Ordering::Equal)]
    #[case("-", "2025-04-27 04:37", Ordering::Less)]
    #[case("1 апреля", "Анна", Ordering::Less)]
    #[case("Zeta", "Анна", Ordering::Less)]
    #[case("2021-03-15", "2021-12-01", Ordering::Less)]
    fn orders_like_a_numeric_collator(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_text(a, b), expected);
    }

    #[rstest]
    #[case("е", "ё", Ordering::Less)]
    #[case("ё", "ж", Ordering::Less)]
    #[case("Ёлкин", "Жуков", Ordering::Less)]
    #[case("Ёлкин", "Елкин", Ordering::Greater)]
    #[case("ёж", "еж", Ordering::Greater)]
    #[case("e", "é", Ordering::Less)]
    #[case("é", "f", Ordering::Less)]
    #[case("école", "fable", Ordering::Less)]
    #[case("éa", "eb", Ordering::Less)]
    #[case("E", "é", Ordering::Less)]
    #[case("é", "É", Ordering::Less)]
    #[case("Иб", "Йа", Ordering::Less)]
    #[case("Сергей", "Сергеи", Ordering::Greater)]
    fn diacritics_sort_with_their_base_letter(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_text(a, b), expected);
    }

    proptest! {
        #[test]
        fn antisymmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(compare_text(&a, &b), compare_text(&b, &a).reverse());
        }

        #[test]
        fn equal_only_for_equal_text(a in "[a-zA-Zéёе0-9 ]{0,8}", b in "[a-zA-Zéёе0-9 ]{0,8}") {
            prop_assert_eq!(compare_text(&a, &b) == Ordering::Equal, a == b);
        }

        #[test]
        fn numbers_follow_numeric_order(x in 0u32..100_000, y in 0u32..100_000) {
            prop_assert_eq!(
                compare_text(&x.to_string(), &y.to_string()),
                x.cmp(&y)
            );
        }
    }
}
