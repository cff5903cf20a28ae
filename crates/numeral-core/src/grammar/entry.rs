use std::fmt;

/// Which magnitude range a vocabulary word covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// 1..=9
    Ones,
    /// 10..=19 and 20, 30, .., 90
    Tens,
    /// 100, 200, .., 900
    Hundreds,
    /// 10^3, 10^6, ..; multiplies the group that precedes it
    Group,
}

impl Category {
    /// Lookup order used when decoding a token; the first hit wins.
    pub const LOOKUP_ORDER: [Category; 4] = [
        Category::Ones,
        Category::Tens,
        Category::Hundreds,
        Category::Group,
    ];

    /// Largest group multiplier a vocabulary may define (10^15).
    pub const MAX_GROUP: u64 = 1_000_000_000_000_000;

    /// Whether `value` lies in this category's numeric range.
    pub fn accepts(self, value: u64) -> bool {
        match self {
            Category::Ones => (1..=9).contains(&value),
            Category::Tens => {
                (10..=19).contains(&value) || (value % 10 == 0 && (20..=90).contains(&value))
            }
            Category::Hundreds => value % 100 == 0 && (100..=900).contains(&value),
            Category::Group => is_group_multiplier(value),
        }
    }

    /// Name of the vocabulary table section for this category.
    pub fn table_name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Tens => "tens",
            Category::Hundreds => "hundreds",
            Category::Group => "groups",
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Category::Ones => 0,
            Category::Tens => 1,
            Category::Hundreds => 2,
            Category::Group => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

fn is_group_multiplier(value: u64) -> bool {
    let mut m = 1_000u64;
    while m <= Category::MAX_GROUP {
        if m == value {
            return true;
        }
        m *= 1_000;
    }
    false
}

/// A vocabulary word's category and the value it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrammarEntry {
    pub category: Category,
    pub value: u64,
}

impl GrammarEntry {
    pub fn new(category: Category, value: u64) -> Self {
        Self { category, value }
    }
}
