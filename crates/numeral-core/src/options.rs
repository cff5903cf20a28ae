use std::collections::BTreeMap;

/// String-keyed rendering options for one grammar instance.
///
/// Keys compare case-insensitively (`onePrefix` and `oneprefix` are the same
/// option) and are stored lower-cased. Iteration order is by key, so applying
/// a set of options is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOptions(BTreeMap<String, String>);

impl ConversionOptions {
    pub fn new() -> Self {
        ConversionOptions(BTreeMap::new())
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: &str) -> &mut Self {
        self.0.insert(key.to_lowercase(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for ConversionOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = ConversionOptions::new();
        for (k, v) in iter {
            options.insert(k.as_ref(), v.as_ref());
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        let options = ConversionOptions::new().with("onePrefix", "a");
        assert_eq!(options.get("oneprefix"), Some("a"));
        assert_eq!(options.get("ONEPREFIX"), Some("a"));
        assert_eq!(options.get("useHyphen"), None);
    }

    #[test]
    fn later_value_wins() {
        let options = ConversionOptions::new()
            .with("useHyphen", "true")
            .with("usehyphen", "false");
        assert_eq!(options.len(), 1);
        assert_eq!(options.get("useHyphen"), Some("false"));
    }

    #[test]
    fn collect_from_pairs() {
        let options: ConversionOptions = [("onePrefix", "one"), ("useHyphen", "false")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["oneprefix", "usehyphen"]);
    }
}
