use colored::Colorize;
use log::info;
use std::fmt::Display;

/// Logs a section heading surrounded by empty lines.
pub fn log_heading(title: &str) {
    info!("");
    info!("{}", format!(" === {} === ", title).bold());
    info!("");
}

/// Formats a sequence as `[a, b, c]` using the `Display` implementation of the items.
pub fn format_list<Item: Display, Items: IntoIterator<Item = Item>>(items: Items) -> String {
    let items: Vec<_> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Formats a sequence of edge traversals as `(a, b), (b, c)`.
pub fn format_walk<Node: Display>(walk: &[(Node, Node)]) -> String {
    format_list(walk.iter().map(|(from, to)| format!("({}, {})", from, to)))
}

/// Formats key-value pairs as `{a: 1, b: 2}`.
pub fn format_map<Key: Display, Value: Display, Pairs: IntoIterator<Item = (Key, Value)>>(
    pairs: Pairs,
) -> String {
    let pairs: Vec<_> = pairs
        .into_iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::{format_list, format_map, format_walk};

    #[test]
    fn test_formatting() {
        assert_eq!(format_list(vec![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format_list(Vec::<u8>::new()), "[]");
        assert_eq!(format_walk(&[("a", "b"), ("b", "a")]), "[(a, b), (b, a)]");
        assert_eq!(format_map(vec![("a", 1), ("b", 2)]), "{a: 1, b: 2}");
    }
}
