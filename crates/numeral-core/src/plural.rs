//! One/few/many agreement for nouns counted by a number.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralForm {
    /// 1, 21, 101: "тысяча"
    One,
    /// 2-4, 22-24: "тысячи"
    Few,
    /// 0, 5-20, 25-30, 111-114: "тысяч"
    Many,
}

impl PluralForm {
    /// Position in a `[one, few, many]` word list.
    pub fn index(self) -> usize {
        match self {
            PluralForm::One => 0,
            PluralForm::Few => 1,
            PluralForm::Many => 2,
        }
    }

    /// Pick this form out of a `[one, few, many]` list, falling back to the
    /// first word when the list is shorter.
    pub fn select<'a>(self, forms: &'a [String]) -> Option<&'a str> {
        forms
            .get(self.index())
            .or_else(|| forms.first())
            .map(String::as_str)
    }
}

/// Plural form selected by the last digit and the last two digits of `n`.
pub fn plural_form(n: u64) -> PluralForm {
    let last = n % 10;
    let last_two = n % 100;
    match (last, last_two) {
        (1, l2) if l2 != 11 => PluralForm::One,
        (2..=4, l2) if !(12..=14).contains(&l2) => PluralForm::Few,
        _ => PluralForm::Many,
    }
}

#[cfg(test)]
mod tests {
    use icu_locale::Locale;
    use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

    use super::*;

    #[test]
    fn test_basic_forms() {
        assert_eq!(plural_form(1), PluralForm::One);
        assert_eq!(plural_form(2), PluralForm::Few);
        assert_eq!(plural_form(4), PluralForm::Few);
        assert_eq!(plural_form(5), PluralForm::Many);
        assert_eq!(plural_form(0), PluralForm::Many);
    }

    #[test]
    fn test_teens_take_many() {
        for n in 11..=14 {
            assert_eq!(plural_form(n), PluralForm::Many, "n = {n}");
            assert_eq!(plural_form(n + 100), PluralForm::Many, "n = {}", n + 100);
        }
    }

    #[test]
    fn test_compound_numbers() {
        assert_eq!(plural_form(21), PluralForm::One);
        assert_eq!(plural_form(101), PluralForm::One);
        assert_eq!(plural_form(22), PluralForm::Few);
        assert_eq!(plural_form(234), PluralForm::Few);
        assert_eq!(plural_form(517), PluralForm::Many);
        assert_eq!(plural_form(385), PluralForm::Many);
    }

    #[test]
    fn test_select_from_word_list() {
        let forms: Vec<String> = ["тысяча", "тысячи", "тысяч"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(plural_form(1).select(&forms), Some("тысяча"));
        assert_eq!(plural_form(3).select(&forms), Some("тысячи"));
        assert_eq!(plural_form(7).select(&forms), Some("тысяч"));

        let single = vec!["thousand".to_string()];
        assert_eq!(plural_form(7).select(&single), Some("thousand"));
        assert_eq!(plural_form(7).select(&[]), None);
    }

    #[test]
    fn test_agrees_with_cldr_russian_cardinals() {
        let locale: Locale = "ru".parse().unwrap();
        let pr = PluralRules::try_new(locale.into(), PluralRuleType::Cardinal.into()).unwrap();

        for n in 0..=1000u64 {
            let expected = match pr.category_for(n as usize) {
                PluralCategory::One => PluralForm::One,
                PluralCategory::Few => PluralForm::Few,
                _ => PluralForm::Many,
            };
            assert_eq!(plural_form(n), expected, "n = {n}");
        }
    }
}
