/// One category of key entities, e.g. `People` with its names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCategory {
    pub name: String,
    pub items: Vec<String>,
}

const BULLETS: [char; 2] = ['-', '•'];

/// Parses the backend's free-form key-entities text into categories.
///
/// A header is an unindented, non-bulleted line containing a colon; text
/// after the colon becomes the first item. Following non-empty lines are
/// items of the current category. Lines before the first header are dropped.
pub fn parse_key_entities(text: &str) -> Vec<EntityCategory> {
    let mut categories: Vec<EntityCategory> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if is_header(line) {
            if let Some((name, rest)) = line.split_once(':') {
                let mut category = EntityCategory {
                    name: name.trim().to_string(),
                    items: Vec::new(),
                };
                let rest = rest.trim();
                if !rest.is_empty() {
                    category.items.push(rest.to_string());
                }
                categories.push(category);
            }
        } else if let Some(current) = categories.last_mut() {
            current.items.push(strip_bullet(line));
        }
    }

    categories
}

fn is_header(line: &str) -> bool {
    let Some(first) = line.chars().next() else {
        return false;
    };
    line.contains(':') && !first.is_whitespace() && !BULLETS.contains(&first)
}

fn strip_bullet(line: &str) -> String {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix(BULLETS)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}
