/// Human readable champion name from its catalog key.
pub fn champion_display_name(key: &str) -> String {
    if key == "MonkeyKing" {
        return "Wukong".to_string();
    }

    let mut name = String::with_capacity(key.len() + 2);
    let mut previous: Option<char> = None;
    for c in key.chars() {
        if let Some(prev) = previous {
            if c.is_ascii_uppercase() && !prev.is_ascii_uppercase() {
                name.push(' ');
            }
        }
        name.push(c);
        previous = Some(c);
    }
    name
}

/// Case-insensitive prefix match; an empty query matches everything.
pub fn starts_with_ignore_case(name: &str, query: &str) -> bool {
    name.to_lowercase().starts_with(&query.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(champion_display_name("MonkeyKing"), "Wukong");
        assert_eq!(champion_display_name("MissFortune"), "Miss Fortune");
        assert_eq!(champion_display_name("TwistedFate"), "Twisted Fate");
        assert_eq!(champion_display_name("Ahri"), "Ahri");
        assert_eq!(champion_display_name(""), "");
    }

    #[test]
    fn prefix_search() {
        assert!(starts_with_ignore_case("Miss Fortune", "miss"));
        assert!(starts_with_ignore_case("Miss Fortune", ""));
        assert!(!starts_with_ignore_case("Miss Fortune", "fortune"));
    }
}
